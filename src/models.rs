//! Modelos de dominio: campos del formulario, petición/respuesta del servicio
//! de predicción y datos de los gráficos.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Los seis campos numéricos del formulario tal y como los envía el navegador.
/// Cualquiera puede venir vacío (`null`); no se valida nada antes de enviar.
/// Se guardan como `Number` para reenviarlos y mostrarlos sin tocar: `7.5`,
/// `30.0` o `1e20` llegan al servicio y al panel igual que se escribieron.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionFields {
    pub departamento: Option<Number>,
    pub cai_departamentos: Option<Number>,
    /// 1–12 (sólo como pista en la UI)
    pub mes: Option<Number>,
    /// 2000–2100 (sólo como pista en la UI)
    pub ano: Option<Number>,
    pub poblacion: Option<Number>,
    /// 0–100
    pub pobreza_monetaria: Option<Number>,
}

/// Cuerpo JSON que espera `POST /api/prediction`. Las claves van capitalizadas
/// y los campos ausentes se serializan como `null`, nunca se omiten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "Departamento")]
    pub departamento: Option<Number>,
    #[serde(rename = "CAI_Departamentos")]
    pub cai_departamentos: Option<Number>,
    #[serde(rename = "Mes")]
    pub mes: Option<Number>,
    #[serde(rename = "Ano")]
    pub ano: Option<Number>,
    #[serde(rename = "Poblacion")]
    pub poblacion: Option<Number>,
    #[serde(rename = "Pobreza_Monetaria")]
    pub pobreza_monetaria: Option<Number>,
}

impl From<&PredictionFields> for PredictionRequest {
    fn from(fields: &PredictionFields) -> Self {
        Self {
            departamento: fields.departamento.clone(),
            cai_departamentos: fields.cai_departamentos.clone(),
            mes: fields.mes.clone(),
            ano: fields.ano.clone(),
            poblacion: fields.poblacion.clone(),
            pobreza_monetaria: fields.pobreza_monetaria.clone(),
        }
    }
}

/// Respuesta del servicio de predicción. El valor es opaco para el dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Value,
}

impl PredictionResponse {
    /// Texto de la predicción tal cual: las cadenas sin comillas, el resto como JSON.
    pub fn display_value(&self) -> String {
        display_json(&self.prediction)
    }
}

/// Series que devuelve `GET /api/data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartData {
    pub categories: Vec<Value>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn is_consistent(&self) -> bool {
        self.categories.len() == self.values.len()
    }
}

pub fn display_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Campo opcional del formulario como texto; vacío si el usuario no lo rellenó.
pub fn display_field(value: &Option<Number>) -> String {
    value.as_ref().map(Number::to_string).unwrap_or_default()
}
