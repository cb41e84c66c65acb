//! Column selection and its resolution into a per-kind request.

use serde::{Deserialize, Serialize};

use super::ChartKind;

/// What the user picked: a chart kind and up to three columns.
///
/// Empty column names are treated as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSelection {
    pub kind: ChartKind,
    pub x: Option<String>,
    pub y: Option<String>,
    /// Radius column, only read by bubble charts.
    pub r: Option<String>,
}

impl ChartSelection {
    /// A selection with no columns chosen yet.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
            r: None,
        }
    }

    /// Point every column selector at the first column, as a freshly populated drop-down does.
    pub fn with_default_columns(kind: ChartKind, columns: &[String]) -> Self {
        let first = columns.first().cloned().filter(|c| !c.is_empty());
        Self {
            kind,
            x: first.clone(),
            y: first.clone(),
            r: first,
        }
    }

    /// Set the x column. An empty name leaves it unset.
    pub fn with_x(mut self, column: impl Into<String>) -> Self {
        self.x = non_empty(column.into());
        self
    }

    /// Set the y column. An empty name leaves it unset.
    pub fn with_y(mut self, column: impl Into<String>) -> Self {
        self.y = non_empty(column.into());
        self
    }

    /// Set the bubble radius column. An empty name leaves it unset.
    pub fn with_r(mut self, column: impl Into<String>) -> Self {
        self.r = non_empty(column.into());
        self
    }

    /// Resolve into a [`ChartRequest`], or `None` when nothing can be rendered:
    ///
    /// - `x` is unset, or
    /// - `y` is unset and the kind [requires it](ChartKind::requires_y).
    pub fn resolve(&self) -> Option<ChartRequest<'_>> {
        let x = column(&self.x)?;
        let y = column(&self.y);
        let required_y = || {
            if y.is_none() {
                tracing::debug!(kind = %self.kind, "no y column selected");
            }
            y
        };

        let request = match self.kind {
            ChartKind::Scatter => ChartRequest::Scatter { x, y: required_y()? },
            ChartKind::Bar => ChartRequest::Bar { x, y: required_y()? },
            ChartKind::Line => ChartRequest::Line { x, y: required_y()? },
            ChartKind::Histogram => ChartRequest::Histogram { y: required_y()? },
            ChartKind::Heatmap => ChartRequest::Heatmap { x, y: required_y()? },
            ChartKind::Bubble => ChartRequest::Bubble {
                x,
                y: required_y()?,
                r: column(&self.r),
            },
            ChartKind::Pie => ChartRequest::Pie { x, y },
            ChartKind::Radar => ChartRequest::Radar { x, y },
            ChartKind::Area => ChartRequest::Area { x, y: required_y()? },
            ChartKind::Treemap => ChartRequest::Treemap { x, y },
            ChartKind::Waterfall => ChartRequest::Waterfall { x, y },
        };
        Some(request)
    }
}

/// A renderable selection, one variant per chart kind.
///
/// `Option` columns belong to the kinds that may render without them (a missing y means "count
/// rows"; a missing radius means the default marker size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRequest<'a> {
    Scatter { x: &'a str, y: &'a str },
    Bar { x: &'a str, y: &'a str },
    Line { x: &'a str, y: &'a str },
    Histogram { y: &'a str },
    Heatmap { x: &'a str, y: &'a str },
    Bubble { x: &'a str, y: &'a str, r: Option<&'a str> },
    Pie { x: &'a str, y: Option<&'a str> },
    Radar { x: &'a str, y: Option<&'a str> },
    Area { x: &'a str, y: &'a str },
    Treemap { x: &'a str, y: Option<&'a str> },
    Waterfall { x: &'a str, y: Option<&'a str> },
}

impl ChartRequest<'_> {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartRequest::Scatter { .. } => ChartKind::Scatter,
            ChartRequest::Bar { .. } => ChartKind::Bar,
            ChartRequest::Line { .. } => ChartKind::Line,
            ChartRequest::Histogram { .. } => ChartKind::Histogram,
            ChartRequest::Heatmap { .. } => ChartKind::Heatmap,
            ChartRequest::Bubble { .. } => ChartKind::Bubble,
            ChartRequest::Pie { .. } => ChartKind::Pie,
            ChartRequest::Radar { .. } => ChartKind::Radar,
            ChartRequest::Area { .. } => ChartKind::Area,
            ChartRequest::Treemap { .. } => ChartKind::Treemap,
            ChartRequest::Waterfall { .. } => ChartKind::Waterfall,
        }
    }
}

fn column(c: &Option<String>) -> Option<&str> {
    c.as_deref().filter(|s| !s.is_empty())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::{ChartRequest, ChartSelection};
    use crate::chart::ChartKind;

    #[test]
    fn unset_x_never_resolves() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartSelection::new(kind).with_y("v").resolve(), None, "{kind}");
        }
    }

    #[test]
    fn unset_y_only_resolves_for_exempt_kinds() {
        for kind in ChartKind::ALL {
            let sel = ChartSelection::new(kind).with_x("k");
            let resolved = sel.resolve();
            assert_eq!(resolved.is_some(), !kind.requires_y(), "{kind}");
            if let Some(request) = resolved {
                assert_eq!(request.kind(), kind);
            }
        }
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let sel = ChartSelection::new(ChartKind::Scatter).with_x("").with_y("v");
        assert_eq!(sel.x, None);
        assert_eq!(sel.resolve(), None);
    }

    #[test]
    fn request_carries_only_what_the_transform_reads() {
        let sel = ChartSelection::new(ChartKind::Histogram).with_x("a").with_y("b").with_r("c");
        assert_eq!(sel.resolve(), Some(ChartRequest::Histogram { y: "b" }));

        let sel = ChartSelection::new(ChartKind::Bubble).with_x("a").with_y("b");
        assert_eq!(
            sel.resolve(),
            Some(ChartRequest::Bubble { x: "a", y: "b", r: None })
        );
    }

    #[test]
    fn default_columns_point_at_the_first_header() {
        let cols = vec!["year".to_string(), "sales".to_string()];
        let sel = ChartSelection::with_default_columns(ChartKind::Line, &cols);
        assert_eq!(sel.x.as_deref(), Some("year"));
        assert_eq!(sel.y.as_deref(), Some("year"));
        assert_eq!(sel.r.as_deref(), Some("year"));
        assert!(ChartSelection::with_default_columns(ChartKind::Line, &[]).resolve().is_none());
    }
}
