//! Payload for the declarative plotting surface.

use serde::Serialize;

use crate::types::{Value, json_number};

/// Which declarative render call draws the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarativeRender {
    Scatterplot,
    Barchart,
    Linechart,
    Histogram,
    Heatmap,
}

/// One x/y point, with a marker size for bubble charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: Value,
    pub y: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
}

/// `{values: [{x, y}]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterData {
    pub values: Vec<ScatterPoint>,
}

/// `{index, value}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub index: String,
    #[serde(serialize_with = "json_number::number")]
    pub value: f64,
}

/// `{values: [[{x, y}]], series: [name]}`: one inner list per series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineData {
    pub values: Vec<Vec<ScatterPoint>>,
    pub series: Vec<String>,
}

/// `{values, xTickLabels, yTickLabels}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    #[serde(serialize_with = "json_number::grid")]
    pub values: Vec<Vec<f64>>,
    pub x_tick_labels: Vec<String>,
    pub y_tick_labels: Vec<String>,
}

/// The data argument of a declarative render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeclarativeData {
    Scatter(ScatterData),
    Bar(Vec<BarDatum>),
    Line(LineData),
    Histogram(Vec<Value>),
    Heatmap(HeatmapData),
}

/// Axis labels and sizing for a declarative render call.
///
/// Fields a given chart kind does not set are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarativeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Marker size accessor: `size × size_scale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_scale: Option<f64>,
}

impl DeclarativeOptions {
    /// Visual marker size for a point, or `None` when there is no accessor or the size is not
    /// numeric.
    pub fn marker_size(&self, point: &ScatterPoint) -> Option<f64> {
        let scale = self.size_scale?;
        let size = point.size.as_ref()?.as_number()?;
        Some(size * scale)
    }
}

/// A complete declarative render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarativeChart {
    pub render: DeclarativeRender,
    pub data: DeclarativeData,
    pub options: DeclarativeOptions,
}
