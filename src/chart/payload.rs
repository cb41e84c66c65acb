//! Per-kind dispatch from a selection to a renderer payload.

use serde::Serialize;

use crate::processing::{
    CoercionPolicy, Measure, aggregate_sum, build_category_matrix, column_values, cumulative_sum,
};
use crate::types::{DataSet, Value};

use super::canvas::{CanvasChart, CanvasChartType, CanvasData, CanvasDataset, CanvasOptions, Fill};
use super::declarative::{
    BarDatum, DeclarativeChart, DeclarativeData, DeclarativeOptions, DeclarativeRender, HeatmapData, LineData,
    ScatterData, ScatterPoint,
};
use super::options::{AREA_BACKGROUND, AREA_BORDER, RADAR_BACKGROUND, RADAR_BORDER, RenderOptions};
use super::selection::{ChartRequest, ChartSelection};

/// Shaped data for exactly one renderer surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "surface", rename_all = "lowercase")]
pub enum ChartPayload {
    /// Grammar-of-graphics renderer: scatter, bar, line, histogram, heatmap and bubble.
    Declarative(DeclarativeChart),
    /// Canvas renderer: pie, radar, area, treemap and waterfall.
    Canvas(CanvasChart),
}

impl ChartPayload {
    /// The declarative chart, or `None` for a canvas payload.
    pub fn as_declarative(&self) -> Option<&DeclarativeChart> {
        match self {
            ChartPayload::Declarative(chart) => Some(chart),
            ChartPayload::Canvas(_) => None,
        }
    }

    /// The canvas chart, or `None` for a declarative payload.
    pub fn as_canvas(&self) -> Option<&CanvasChart> {
        match self {
            ChartPayload::Canvas(chart) => Some(chart),
            ChartPayload::Declarative(_) => None,
        }
    }
}

/// Shape `dataset` for the chart described by `selection`.
///
/// Returns `None` (render nothing) when the dataset has no rows, when `x` is unset, or when `y`
/// is unset for a kind that [requires it](super::ChartKind::requires_y). Callers must check for
/// `None` before invoking a renderer.
///
/// Pie, radar, treemap and waterfall charts without a y column plot row counts (each row
/// contributes `1`) under the series label `"count"`.
pub fn select_chart_payload(
    dataset: &DataSet,
    selection: &ChartSelection,
    options: &RenderOptions,
) -> Option<ChartPayload> {
    if dataset.is_empty() {
        tracing::debug!(kind = %selection.kind, "empty dataset, nothing to render");
        return None;
    }
    let Some(request) = selection.resolve() else {
        tracing::debug!(kind = %selection.kind, "incomplete column selection, nothing to render");
        return None;
    };
    tracing::trace!(?request, rows = dataset.row_count(), "shaping chart payload");
    Some(shape(dataset, request, options))
}

fn shape(dataset: &DataSet, request: ChartRequest<'_>, options: &RenderOptions) -> ChartPayload {
    let policy = options.coercion;
    match request {
        ChartRequest::Scatter { x, y } => declarative(
            DeclarativeRender::Scatterplot,
            DeclarativeData::Scatter(ScatterData {
                values: points(dataset, x, y, policy),
            }),
            DeclarativeOptions {
                font_size: Some(options.font_size),
                ..axes(x, y, options)
            },
        ),
        ChartRequest::Bar { x, y } => declarative(
            DeclarativeRender::Barchart,
            DeclarativeData::Bar(
                aggregate_sum(dataset, x, y, policy)
                    .into_iter()
                    .map(|g| BarDatum {
                        index: g.key,
                        value: g.sum,
                    })
                    .collect(),
            ),
            DeclarativeOptions {
                height: None,
                ..axes(x, y, options)
            },
        ),
        ChartRequest::Line { x, y } => declarative(
            DeclarativeRender::Linechart,
            DeclarativeData::Line(LineData {
                values: vec![points(dataset, x, y, policy)],
                series: vec![y.to_owned()],
            }),
            axes(x, y, options),
        ),
        ChartRequest::Histogram { y } => declarative(
            DeclarativeRender::Histogram,
            DeclarativeData::Histogram(column_values(dataset, y, policy)),
            DeclarativeOptions {
                width: options.width,
                height: Some(options.height),
                ..Default::default()
            },
        ),
        ChartRequest::Heatmap { x, y } => {
            let matrix = build_category_matrix(dataset, x, y, policy);
            declarative(
                DeclarativeRender::Heatmap,
                DeclarativeData::Heatmap(HeatmapData {
                    values: matrix.values,
                    x_tick_labels: matrix.x_labels,
                    y_tick_labels: matrix.y_labels,
                }),
                axes(x, y, options),
            )
        }
        ChartRequest::Bubble { x, y, r } => {
            let mut values = points(dataset, x, y, policy);
            let sizes: Vec<Value> = match r {
                Some(r) => column_values(dataset, r, policy),
                None => vec![Value::Number(options.default_bubble_size); values.len()],
            };
            for (point, size) in values.iter_mut().zip(sizes) {
                point.size = Some(size);
            }
            declarative(
                DeclarativeRender::Scatterplot,
                DeclarativeData::Scatter(ScatterData { values }),
                DeclarativeOptions {
                    font_size: Some(options.font_size),
                    size_scale: Some(options.bubble_size_scale),
                    ..axes(x, y, options)
                },
            )
        }
        ChartRequest::Pie { x, y } => {
            let groups = aggregate_sum(dataset, x, Measure::from_selection(y), policy);
            let colors = options.palette.cycle(groups.len());
            let (labels, data): (Vec<String>, Vec<Value>) = groups
                .into_iter()
                .map(|g| (g.key, Value::Number(g.sum)))
                .unzip();
            canvas(
                CanvasChartType::Pie,
                labels,
                CanvasDataset {
                    label: None,
                    data,
                    background_color: Fill::PerPoint(colors),
                    border_color: None,
                    fill: None,
                },
                None,
            )
        }
        ChartRequest::Radar { x, y } => {
            let measure = Measure::from_selection(y);
            canvas(
                CanvasChartType::Radar,
                labels(dataset, x, policy),
                CanvasDataset {
                    label: Some(measure.label().to_owned()),
                    data: measure.values(dataset, policy),
                    background_color: Fill::Solid(RADAR_BACKGROUND.to_owned()),
                    border_color: Some(RADAR_BORDER.to_owned()),
                    fill: None,
                },
                None,
            )
        }
        ChartRequest::Area { x, y } => canvas(
            CanvasChartType::Line,
            labels(dataset, x, policy),
            CanvasDataset {
                label: Some(y.to_owned()),
                data: column_values(dataset, y, policy),
                background_color: Fill::Solid(AREA_BACKGROUND.to_owned()),
                border_color: Some(AREA_BORDER.to_owned()),
                fill: Some(true),
            },
            Some(CanvasOptions::filled_line()),
        ),
        ChartRequest::Treemap { x, y } => {
            let measure = Measure::from_selection(y);
            let labels = labels(dataset, x, policy);
            let colors = options.palette.cycle(labels.len());
            canvas(
                CanvasChartType::Bar,
                labels,
                CanvasDataset {
                    label: Some(measure.label().to_owned()),
                    data: measure.values(dataset, policy),
                    background_color: Fill::PerPoint(colors),
                    border_color: None,
                    fill: None,
                },
                None,
            )
        }
        ChartRequest::Waterfall { x, y } => {
            let measure = Measure::from_selection(y);
            let series = cumulative_sum(dataset, x, measure, policy);
            let colors = options.palette.cycle(series.labels.len());
            canvas(
                CanvasChartType::Bar,
                series.labels,
                CanvasDataset {
                    label: Some(measure.label().to_owned()),
                    data: series.values.into_iter().map(Value::Number).collect(),
                    background_color: Fill::PerPoint(colors),
                    border_color: None,
                    fill: None,
                },
                None,
            )
        }
    }
}

fn declarative(render: DeclarativeRender, data: DeclarativeData, options: DeclarativeOptions) -> ChartPayload {
    ChartPayload::Declarative(DeclarativeChart { render, data, options })
}

fn canvas(
    chart_type: CanvasChartType,
    labels: Vec<String>,
    dataset: CanvasDataset,
    options: Option<CanvasOptions>,
) -> ChartPayload {
    ChartPayload::Canvas(CanvasChart {
        chart_type,
        data: CanvasData {
            labels,
            datasets: vec![dataset],
        },
        options,
    })
}

/// x/y labels plus width and height.
fn axes(x: &str, y: &str, options: &RenderOptions) -> DeclarativeOptions {
    DeclarativeOptions {
        x_label: Some(x.to_owned()),
        y_label: Some(y.to_owned()),
        width: options.width,
        height: Some(options.height),
        ..Default::default()
    }
}

fn points(dataset: &DataSet, x: &str, y: &str, policy: CoercionPolicy) -> Vec<ScatterPoint> {
    column_values(dataset, x, policy)
        .into_iter()
        .zip(column_values(dataset, y, policy))
        .map(|(x, y)| ScatterPoint { x, y, size: None })
        .collect()
}

/// Canvas labels are the coerced x values printed back as text, so `"1.50"` becomes `"1.5"`.
fn labels(dataset: &DataSet, x: &str, policy: CoercionPolicy) -> Vec<String> {
    column_values(dataset, x, policy)
        .iter()
        .map(Value::to_string)
        .collect()
}
