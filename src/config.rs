//! Carga y gestión de configuración del dashboard.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use url::Url;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8050";
const DEFAULT_PREDICTION_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_FRONTEND_DIR: &str = "frontend";

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    /// Dirección base del servicio de predicción (sin `/api/...`).
    pub prediction_api_url: Url,
    /// `None` significa esperar indefinidamente la respuesta.
    pub prediction_api_timeout: Option<Duration>,
    pub frontend_dir: String,
    pub open_browser: bool,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que [`AppConfig::from_env`], pero leyendo de una función arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let api_url_str = lookup("PREDICTION_API_URL")
            .unwrap_or_else(|| DEFAULT_PREDICTION_API_URL.to_string());
        let prediction_api_url = parse_base_url(&api_url_str)?;

        let prediction_api_timeout = match lookup("PREDICTION_API_TIMEOUT_SECS") {
            None => None,
            Some(raw) => Some(parse_timeout(&raw)?),
        };

        let frontend_dir =
            lookup("FRONTEND_DIR").unwrap_or_else(|| DEFAULT_FRONTEND_DIR.to_string());

        let open_browser = match lookup("OPEN_BROWSER") {
            None => true,
            Some(raw) => parse_flag(&raw)?,
        };

        Ok(Self {
            server_addr,
            prediction_api_url,
            prediction_api_timeout,
            frontend_dir,
            open_browser,
        })
    }
}

/// La URL base siempre termina en `/` para que `Url::join` no pise el último segmento.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| anyhow!("PREDICTION_API_URL no es una URL válida ({raw}): {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(
            "PREDICTION_API_URL debe usar http o https, no '{}'",
            url.scheme()
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(anyhow!(
            "PREDICTION_API_TIMEOUT_SECS debe ser un entero positivo, no '{raw}'"
        )),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow!("Valor booleano no soportado en OPEN_BROWSER: {other}")),
    }
}
