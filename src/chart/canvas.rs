//! Payload for the canvas chart surface.

use serde::Serialize;

use crate::types::Value;

/// Canvas chart `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasChartType {
    Pie,
    Radar,
    Line,
    Bar,
}

/// A background colour: one for the whole dataset, or one per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Value>,
    pub background_color: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasData {
    pub labels: Vec<String>,
    pub datasets: Vec<CanvasDataset>,
}

/// `options.elements.line.fill`, the only option any chart kind sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasOptions {
    pub elements: CanvasElements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasElements {
    pub line: LineElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineElement {
    pub fill: bool,
}

impl CanvasOptions {
    /// Options for a filled line (area) chart.
    pub fn filled_line() -> Self {
        Self {
            elements: CanvasElements {
                line: LineElement { fill: true },
            },
        }
    }
}

/// A complete canvas chart config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasChart {
    #[serde(rename = "type")]
    pub chart_type: CanvasChartType,
    pub data: CanvasData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CanvasOptions>,
}
