//! Utilidades de test: un servicio de predicción falso levantado con axum en un
//! puerto efímero, que registra lo que recibe.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use url::Url;

use crate::prediction_client::PredictionClient;

/// Qué contesta el stub en cada endpoint.
#[derive(Clone, Debug)]
pub struct StubBehavior {
    pub prediction_status: StatusCode,
    pub prediction_body: Value,
    pub data_status: StatusCode,
    pub data_body: Value,
}

impl Default for StubBehavior {
    fn default() -> Self {
        Self {
            prediction_status: StatusCode::OK,
            prediction_body: json!({ "prediction": 42.5 }),
            data_status: StatusCode::OK,
            data_body: json!({ "categories": ["A", "B"], "values": [1, 2] }),
        }
    }
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    prediction_bodies: Arc<Mutex<Vec<Value>>>,
    data_hits: Arc<AtomicUsize>,
}

pub struct StubServer {
    pub base_url: Url,
    state: StubState,
}

impl StubServer {
    pub fn client(&self) -> PredictionClient {
        PredictionClient::new(self.base_url.clone(), reqwest::Client::new())
    }

    pub fn prediction_bodies(&self) -> Vec<Value> {
        self.state.prediction_bodies.lock().unwrap().clone()
    }

    pub fn prediction_hits(&self) -> usize {
        self.state.prediction_bodies.lock().unwrap().len()
    }

    pub fn data_hits(&self) -> usize {
        self.state.data_hits.load(Ordering::SeqCst)
    }
}

async fn stub_prediction(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.prediction_bodies.lock().unwrap().push(body);
    (
        state.behavior.prediction_status,
        Json(state.behavior.prediction_body.clone()),
    )
}

async fn stub_data(State(state): State<StubState>) -> impl IntoResponse {
    state.data_hits.fetch_add(1, Ordering::SeqCst);
    (state.behavior.data_status, Json(state.behavior.data_body.clone()))
}

pub async fn spawn_stub(behavior: StubBehavior) -> StubServer {
    let state = StubState {
        behavior,
        prediction_bodies: Arc::new(Mutex::new(Vec::new())),
        data_hits: Arc::new(AtomicUsize::new(0)),
    };
    let app = Router::new()
        .route("/api/prediction", post(stub_prediction))
        .route("/api/data", get(stub_data))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
        state,
    }
}

/// Cliente apuntando a un puerto que se acaba de liberar: la conexión se rechaza.
pub async fn unreachable_client() -> PredictionClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    PredictionClient::new(
        Url::parse(&format!("http://{addr}/")).unwrap(),
        reqwest::Client::new(),
    )
}
