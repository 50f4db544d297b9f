//! Cliente HTTP hacia el servicio de predicción externo.
//!
//! Dos endpoints: `POST {base}/api/prediction` y `GET {base}/api/data`.
//! Sólo un estado 200 cuenta como éxito; cualquier otro es un fallo y el cuerpo se ignora.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::{
    config::AppConfig,
    models::{ChartData, PredictionRequest, PredictionResponse},
};

const PREDICTION_PATH: &str = "api/prediction";
const DATA_PATH: &str = "api/data";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Conexión rechazada, timeout, cuerpo ilegible...
    #[error("error de transporte: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("el servicio respondió con estado {0}")]
    Status(StatusCode),
    #[error("respuesta con formato inesperado: {0}")]
    Decode(String),
    #[error("URL inválida: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: Url,
    http: reqwest::Client,
}

impl PredictionClient {
    pub fn new(base_url: Url, http: reqwest::Client) -> Self {
        Self { base_url, http }
    }

    /// Construye el cliente a partir de la configuración (timeout opcional).
    pub fn from_config(cfg: &AppConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("prediccion-dashboard/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = cfg.prediction_api_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(cfg.prediction_api_url.clone(), builder.build()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Envía los campos al modelo y devuelve la predicción.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClientError> {
        let url = self.base_url.join(PREDICTION_PATH)?;
        debug!("POST {url} con {:?}", request);

        let response = self.http.post(url).json(request).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Descarga las series de categorías/valores para los gráficos.
    pub async fn fetch_chart_data(&self) -> Result<ChartData, ClientError> {
        let url = self.base_url.join(DATA_PATH)?;
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let data: ChartData =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        if !data.is_consistent() {
            return Err(ClientError::Decode(format!(
                "{} categorías frente a {} valores",
                data.categories.len(),
                data.values.len()
            )));
        }
        Ok(data)
    }
}
