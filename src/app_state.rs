use crate::{config::AppConfig, prediction_client::PredictionClient};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: PredictionClient,
}
