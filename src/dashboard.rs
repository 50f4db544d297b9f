//! Controlador del dashboard.
//!
//! Cada operación recibe de forma explícita el número de clics de su botón y los
//! valores del formulario, hace como mucho una llamada al servicio externo y
//! devuelve una salida declarativa que el navegador sólo tiene que aplicar.
//! Las funciones `*_output` son la mitad pura: no hacen red ni tienen estado.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::{
    charts::{self, Figure},
    models::{display_field, ChartData, PredictionFields, PredictionResponse},
    prediction_client::{ClientError, PredictionClient},
};

pub const PREDICTION_ERROR_MESSAGE: &str = "Error al realizar la predicción";
pub const RESULT_TITLE: &str = "Resultado de la Predicción";

/// Salida de `submit_prediction`: mensaje del diálogo modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogOutput {
    pub message: String,
    pub displayed: bool,
}

impl DialogOutput {
    pub fn idle() -> Self {
        Self {
            message: String::new(),
            displayed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultPanel {
    Empty,
    Error { text: String },
    Detail { title: String, lines: Vec<PanelLine> },
}

/// Salida de `continue_prediction`: contenido del panel y visibilidad de
/// panel y botón "Continuar".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelOutput {
    pub panel: ResultPanel,
    pub panel_visible: bool,
    pub continue_visible: bool,
}

impl PanelOutput {
    pub fn idle() -> Self {
        Self {
            panel: ResultPanel::Empty,
            panel_visible: false,
            continue_visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsOutput {
    pub scatter: Figure,
    pub line: Figure,
}

impl ChartsOutput {
    pub fn idle() -> Self {
        Self {
            scatter: Figure::empty(),
            line: Figure::empty(),
        }
    }
}

fn is_triggered(n_clicks: i64) -> bool {
    n_clicks > 0
}

fn log_failure(operation: &str, err: &ClientError) {
    match err {
        // Ni siquiera hubo respuesta HTTP.
        ClientError::Transport(e) => {
            error!("{operation}: no se pudo contactar con el servicio de predicción: {e}")
        }
        other => warn!("{operation}: {other}"),
    }
}

pub fn dialog_output(outcome: &Result<PredictionResponse, ClientError>) -> DialogOutput {
    let message = match outcome {
        Ok(response) => format!("Predicción: {}", response.display_value()),
        Err(_) => PREDICTION_ERROR_MESSAGE.to_string(),
    };
    DialogOutput {
        message,
        displayed: true,
    }
}

pub fn panel_output(
    fields: &PredictionFields,
    outcome: &Result<PredictionResponse, ClientError>,
) -> PanelOutput {
    let panel = match outcome {
        Ok(response) => ResultPanel::Detail {
            title: RESULT_TITLE.to_string(),
            lines: vec![
                PanelLine { label: "Predicción", value: response.display_value() },
                PanelLine { label: "Departamento", value: display_field(&fields.departamento) },
                PanelLine { label: "CAI Departamentos", value: display_field(&fields.cai_departamentos) },
                PanelLine { label: "Mes", value: display_field(&fields.mes) },
                PanelLine { label: "Año", value: display_field(&fields.ano) },
                PanelLine { label: "Población", value: display_field(&fields.poblacion) },
                PanelLine { label: "Pobreza Monetaria", value: display_field(&fields.pobreza_monetaria) },
            ],
        },
        Err(_) => ResultPanel::Error {
            text: PREDICTION_ERROR_MESSAGE.to_string(),
        },
    };
    PanelOutput {
        panel,
        panel_visible: true,
        continue_visible: false,
    }
}

pub fn charts_output(outcome: &Result<ChartData, ClientError>) -> ChartsOutput {
    match outcome {
        Ok(data) => ChartsOutput {
            scatter: charts::scatter_figure(data),
            line: charts::line_figure(data),
        },
        Err(_) => ChartsOutput::idle(),
    }
}

/// Botón "Predecir": pide la predicción y devuelve el mensaje del diálogo.
pub async fn submit_prediction(
    client: &PredictionClient,
    n_clicks: i64,
    fields: &PredictionFields,
) -> DialogOutput {
    if !is_triggered(n_clicks) {
        return DialogOutput::idle();
    }

    let outcome = client.predict(&fields.into()).await;
    match &outcome {
        Ok(response) => info!("Predicción recibida: {}", response.display_value()),
        Err(e) => log_failure("submit_prediction", e),
    }
    dialog_output(&outcome)
}

/// Botón "Continuar": repite la llamada (su propia ida y vuelta) y monta el panel de detalle.
pub async fn continue_prediction(
    client: &PredictionClient,
    n_clicks: i64,
    fields: &PredictionFields,
) -> PanelOutput {
    if !is_triggered(n_clicks) {
        return PanelOutput::idle();
    }

    let outcome = client.predict(&fields.into()).await;
    if let Err(e) = &outcome {
        log_failure("continue_prediction", e);
    }
    panel_output(fields, &outcome)
}

/// También ligado a "Predecir". Los campos del formulario no se envían.
pub async fn update_charts(client: &PredictionClient, n_clicks: i64) -> ChartsOutput {
    if !is_triggered(n_clicks) {
        return ChartsOutput::idle();
    }

    let outcome = client.fetch_chart_data().await;
    match &outcome {
        Ok(data) => info!("Datos de gráficos recibidos: {} puntos", data.values.len()),
        Err(e) => log_failure("update_charts", e),
    }
    charts_output(&outcome)
}
