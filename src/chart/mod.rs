//! Chart selection and renderer payloads.
//!
//! A [`ChartSelection`] (chart kind plus x/y/radius columns) is resolved into a [`ChartRequest`]
//! that carries exactly the columns its transform needs, and [`select_chart_payload`] turns that
//! request into a [`ChartPayload`] for one of two renderer surfaces:
//!
//! - [`ChartPayload::Declarative`]: scatterplot, barchart, linechart, histogram and heatmap calls
//! - [`ChartPayload::Canvas`]: a `{type, data: {labels, datasets}, options}` chart config
//!
//! Both serialize to the renderer's camelCase JSON.
//!
//! ```rust
//! use csv_chart_shaper::chart::{select_chart_payload, ChartKind, ChartPayload, ChartSelection, RenderOptions};
//! use csv_chart_shaper::ingestion::csv::ingest_csv_from_str;
//!
//! let ds = ingest_csv_from_str("fruit,qty\napple,3\npear,2\napple,1\n").unwrap();
//! let selection = ChartSelection::new(ChartKind::Pie).with_x("fruit").with_y("qty");
//!
//! let Some(ChartPayload::Canvas(chart)) = select_chart_payload(&ds, &selection, &RenderOptions::default()) else {
//!     panic!("pie renders on the canvas surface");
//! };
//! assert_eq!(chart.data.labels, vec!["apple", "pear"]);
//! ```

pub mod canvas;
pub mod declarative;
pub mod options;
pub mod payload;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseChartKindError;

pub use canvas::{CanvasChart, CanvasChartType, CanvasData, CanvasDataset, CanvasOptions, Fill};
pub use declarative::{
    BarDatum, DeclarativeChart, DeclarativeData, DeclarativeOptions, DeclarativeRender, HeatmapData, LineData,
    ScatterData, ScatterPoint,
};
pub use options::{Palette, RenderOptions};
pub use payload::{ChartPayload, select_chart_payload};
pub use selection::{ChartRequest, ChartSelection};

/// The eleven supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    #[serde(rename = "barchart")]
    Bar,
    #[serde(rename = "linechart")]
    Line,
    Histogram,
    Heatmap,
    Bubble,
    Pie,
    Radar,
    Area,
    Treemap,
    Waterfall,
}

/// Which renderer back end draws a chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSurface {
    Declarative,
    Canvas,
}

impl ChartKind {
    /// All kinds, in selector order.
    pub const ALL: [ChartKind; 11] = [
        ChartKind::Scatter,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Histogram,
        ChartKind::Heatmap,
        ChartKind::Bubble,
        ChartKind::Pie,
        ChartKind::Radar,
        ChartKind::Area,
        ChartKind::Treemap,
        ChartKind::Waterfall,
    ];

    /// Wire name, as used by the chart-kind selector.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "barchart",
            ChartKind::Line => "linechart",
            ChartKind::Histogram => "histogram",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Bubble => "bubble",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::Area => "area",
            ChartKind::Treemap => "treemap",
            ChartKind::Waterfall => "waterfall",
        }
    }

    /// Whether a render needs a y column.
    ///
    /// Pie, radar, treemap and waterfall fall back to counting rows when y is unset.
    pub fn requires_y(self) -> bool {
        !matches!(
            self,
            ChartKind::Pie | ChartKind::Radar | ChartKind::Treemap | ChartKind::Waterfall
        )
    }

    /// Only bubble charts read the radius column, so only they show its selector.
    pub fn uses_radius(self) -> bool {
        self == ChartKind::Bubble
    }

    /// The renderer surface this kind's payload targets.
    pub fn surface(self) -> RenderSurface {
        match self {
            ChartKind::Scatter
            | ChartKind::Bar
            | ChartKind::Line
            | ChartKind::Histogram
            | ChartKind::Heatmap
            | ChartKind::Bubble => RenderSurface::Declarative,
            ChartKind::Pie | ChartKind::Radar | ChartKind::Area | ChartKind::Treemap | ChartKind::Waterfall => {
                RenderSurface::Canvas
            }
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ParseChartKindError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartKind, RenderSurface};

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>(), Ok(kind));
        }
        assert_eq!(" BarChart ".parse::<ChartKind>(), Ok(ChartKind::Bar));
        assert!("donut".parse::<ChartKind>().is_err());
    }

    #[test]
    fn exempt_kinds_and_radius_selector() {
        let exempt: Vec<ChartKind> = ChartKind::ALL.into_iter().filter(|k| !k.requires_y()).collect();
        assert_eq!(
            exempt,
            vec![ChartKind::Pie, ChartKind::Radar, ChartKind::Treemap, ChartKind::Waterfall]
        );
        let radius: Vec<ChartKind> = ChartKind::ALL.into_iter().filter(|k| k.uses_radius()).collect();
        assert_eq!(radius, vec![ChartKind::Bubble]);
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&ChartKind::Line).unwrap(), "\"linechart\"");
        assert_eq!(
            serde_json::from_str::<ChartKind>("\"waterfall\"").unwrap(),
            ChartKind::Waterfall
        );
        assert_eq!(ChartKind::Area.surface(), RenderSurface::Canvas);
        assert_eq!(ChartKind::Bubble.surface(), RenderSurface::Declarative);
    }
}
