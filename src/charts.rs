//! Especificaciones de figura compatibles con Plotly.js.
//!
//! El servidor sólo construye el JSON; el navegador lo pinta con `Plotly.react`.

use serde::Serialize;
use serde_json::Value;

use crate::models::ChartData;

pub const SCATTER_TITLE: &str = "Valor promedio (Gráfico de dispersión)";
pub const LINE_TITLE: &str = "Valor promedio (Gráfico de Líneas)";
pub const X_AXIS_TITLE: &str = "Variable";
pub const Y_AXIS_TITLE: &str = "Valor Promedio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Markers,
    Lines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<Value>,
    pub y: Vec<f64>,
    pub mode: Mode,
    pub marker: Marker,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// Una figura vacía se serializa como `{"data": [], "layout": {}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn empty() -> Self {
        Self::default()
    }
}

fn average_value_figure(data: &ChartData, mode: Mode, color: &str, name: &str, title: &str) -> Figure {
    let trace = Trace {
        kind: "scatter",
        x: data.categories.clone(),
        y: data.values.clone(),
        mode,
        marker: Marker {
            color: color.to_string(),
        },
        name: name.to_string(),
    };
    let layout = Layout {
        title: Some(Title::new(title)),
        xaxis: Some(Axis {
            title: Title::new(X_AXIS_TITLE),
        }),
        yaxis: Some(Axis {
            title: Title::new(Y_AXIS_TITLE),
        }),
    };
    Figure {
        data: vec![trace],
        layout,
    }
}

pub fn scatter_figure(data: &ChartData) -> Figure {
    average_value_figure(data, Mode::Markers, "blue", "Dispersión", SCATTER_TITLE)
}

pub fn line_figure(data: &ChartData) -> Figure {
    average_value_figure(data, Mode::Lines, "red", "Línea", LINE_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ChartData {
        ChartData {
            categories: vec![json!("A"), json!("B")],
            values: vec![1.0, 2.0],
        }
    }

    #[test]
    fn empty_figure_has_no_series_and_no_layout() {
        assert_eq!(
            serde_json::to_value(Figure::empty()).unwrap(),
            json!({ "data": [], "layout": {} })
        );
    }

    #[test]
    fn scatter_uses_markers_and_axis_titles() {
        let value = serde_json::to_value(scatter_figure(&sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{
                    "type": "scatter",
                    "x": ["A", "B"],
                    "y": [1.0, 2.0],
                    "mode": "markers",
                    "marker": { "color": "blue" },
                    "name": "Dispersión"
                }],
                "layout": {
                    "title": { "text": "Valor promedio (Gráfico de dispersión)" },
                    "xaxis": { "title": { "text": "Variable" } },
                    "yaxis": { "title": { "text": "Valor Promedio" } }
                }
            })
        );
    }

    #[test]
    fn line_differs_only_in_mode_style_and_title() {
        let scatter = scatter_figure(&sample());
        let line = line_figure(&sample());

        assert_eq!(line.data.len(), 1);
        assert_eq!(line.data[0].x, scatter.data[0].x);
        assert_eq!(line.data[0].y, scatter.data[0].y);
        assert_eq!(line.data[0].mode, Mode::Lines);
        assert_eq!(line.data[0].marker.color, "red");
        assert_eq!(line.layout.title, Some(Title::new(LINE_TITLE)));
        assert_eq!(line.layout.xaxis, scatter.layout.xaxis);
        assert_eq!(line.layout.yaxis, scatter.layout.yaxis);
    }
}
