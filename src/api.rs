use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    app_state::AppState,
    dashboard::{self, ChartsOutput, DialogOutput, PanelOutput},
    models::PredictionFields,
};

// --- Payloads de la API ---

/// Disparo de un botón con el estado actual del formulario.
#[derive(Debug, Deserialize)]
pub struct TriggerPayload {
    #[serde(default)]
    n_clicks: i64,
    #[serde(default)]
    fields: PredictionFields,
}

#[derive(Debug, Deserialize)]
pub struct ChartsPayload {
    #[serde(default)]
    n_clicks: i64,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/dashboard/predict", post(predict_handler))
        .route("/api/dashboard/continue", post(continue_handler))
        .route("/api/dashboard/charts", post(charts_handler))
        .route("/api/status", get(status_handler))
        .with_state(app_state)
}

// --- Handlers ---
// Los fallos del servicio externo ya vienen renderizados en la salida: siempre 200.

#[axum::debug_handler]
async fn predict_handler(
    State(state): State<AppState>,
    Json(payload): Json<TriggerPayload>,
) -> Json<DialogOutput> {
    Json(dashboard::submit_prediction(&state.client, payload.n_clicks, &payload.fields).await)
}

#[axum::debug_handler]
async fn continue_handler(
    State(state): State<AppState>,
    Json(payload): Json<TriggerPayload>,
) -> Json<PanelOutput> {
    Json(dashboard::continue_prediction(&state.client, payload.n_clicks, &payload.fields).await)
}

#[axum::debug_handler]
async fn charts_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChartsPayload>,
) -> Json<ChartsOutput> {
    Json(dashboard::update_charts(&state.client, payload.n_clicks).await)
}

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "prediction_api": state.client.base_url().as_str(),
    }))
}
