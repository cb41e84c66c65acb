//! The single owner of "current dataset" and "current selection".
//!
//! A UI holds one [`ChartSession`] and mutates it from its event handlers: a file load replaces
//! the dataset wholesale, selector changes update the [`ChartSelection`], and every redraw calls
//! [`ChartSession::render`]. The shaping functions never see the session itself, only the
//! immutable [`DataSet`] it hands out.
//!
//! File reads can finish out of order. Each read takes a [`LoadTicket`] when it starts and only
//! the newest ticket may install its dataset (last write wins).
//!
//! ```rust
//! use csv_chart_shaper::chart::{ChartKind, RenderOptions};
//! use csv_chart_shaper::ingestion::csv::ingest_csv_from_str;
//! use csv_chart_shaper::session::ChartSession;
//!
//! let mut session = ChartSession::new(RenderOptions::default());
//! let slow = session.begin_load();
//! let fast = session.begin_load();
//!
//! assert!(session.finish_load(fast, ingest_csv_from_str("a,b\n1,2\n").unwrap()));
//! assert!(!session.finish_load(slow, ingest_csv_from_str("c\n3\n").unwrap()));
//! assert_eq!(session.columns(), ["a", "b"]);
//!
//! session.set_kind(ChartKind::Scatter);
//! assert!(session.render().is_some());
//! ```

use std::sync::Arc;

use crate::chart::{ChartKind, ChartPayload, ChartSelection, RenderOptions, select_chart_payload};
use crate::types::DataSet;

/// Identifies one in-flight file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Current dataset, selection and render options.
#[derive(Debug, Clone)]
pub struct ChartSession {
    dataset: Arc<DataSet>,
    selection: ChartSelection,
    options: RenderOptions,
    latest_ticket: u64,
}

impl ChartSession {
    /// An empty session showing scatter plots.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            dataset: Arc::new(DataSet::default()),
            selection: ChartSelection::new(ChartKind::Scatter),
            options,
            latest_ticket: 0,
        }
    }

    /// Start a file read. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Install the result of a read started with `ticket`.
    ///
    /// Returns `false` (and drops `dataset`) if a newer read has started since.
    pub fn finish_load(&mut self, ticket: LoadTicket, dataset: DataSet) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding dataset from a superseded file read"
            );
            return false;
        }
        self.replace(dataset);
        true
    }

    /// Replace the dataset immediately, superseding any read still in flight.
    pub fn load(&mut self, dataset: DataSet) {
        self.latest_ticket += 1;
        self.replace(dataset);
    }

    fn replace(&mut self, dataset: DataSet) {
        // Repopulated selectors start on the first column; the chart kind is kept.
        self.selection = ChartSelection::with_default_columns(self.selection.kind, &dataset.columns);
        tracing::debug!(
            rows = dataset.row_count(),
            columns = dataset.columns.len(),
            "dataset replaced"
        );
        self.dataset = Arc::new(dataset);
    }

    /// The current dataset. Cheap to clone and unaffected by later loads.
    pub fn dataset(&self) -> Arc<DataSet> {
        Arc::clone(&self.dataset)
    }

    /// Column names for the selectors.
    pub fn columns(&self) -> &[String] {
        &self.dataset.columns
    }

    /// The current chart kind and column choice.
    pub fn selection(&self) -> &ChartSelection {
        &self.selection
    }

    /// Replace the whole selection.
    pub fn set_selection(&mut self, selection: ChartSelection) {
        self.selection = selection;
    }

    /// Change the chart kind, keeping the chosen columns.
    pub fn set_kind(&mut self, kind: ChartKind) {
        self.selection.kind = kind;
    }

    /// Whether the radius selector should be visible.
    pub fn shows_radius_selector(&self) -> bool {
        self.selection.kind.uses_radius()
    }

    /// Render options applied to every payload this session builds.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace the render options; the selection is kept.
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Shape the current dataset for the current selection. `None` means render nothing.
    pub fn render(&self) -> Option<ChartPayload> {
        select_chart_payload(&self.dataset, &self.selection, &self.options)
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
