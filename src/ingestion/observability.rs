use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::IngestionError;

/// How bad a failed CSV load is. Ordered, so it doubles as an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// The CSV reader failed for a reason other than I/O.
    Error,
    /// The file could not be read at all.
    Critical,
}

/// Where the CSV text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionSource {
    /// A file on disk.
    Path(PathBuf),
    /// Text handed over in memory (e.g. the contents of an uploaded file).
    Inline(String),
}

impl fmt::Display for IngestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionSource::Path(p) => write!(f, "{}", p.display()),
            IngestionSource::Inline(name) => write!(f, "<{name}>"),
        }
    }
}

/// Passed to every observer callback.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input that was read.
    pub source: IngestionSource,
}

/// Stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of data rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
    /// Rows whose field count differed from the header's.
    pub ragged_rows: usize,
    /// Lines (header included) where invalid UTF-8 was replaced with U+FFFD.
    pub invalid_utf8_lines: usize,
}

/// Something worth telling the user about a file that still ingested successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionWarning {
    /// The input had no header line at all.
    EmptyInput,
    /// A header but no data rows; nothing will render.
    HeaderOnly {
        /// Header width.
        columns: usize,
    },
    /// Some rows were shorter or longer than the header.
    RaggedRows {
        /// Number of affected rows.
        count: usize,
    },
    /// The file is not valid UTF-8; the affected cells contain U+FFFD.
    InvalidUtf8 {
        /// Number of affected lines, header included.
        lines: usize,
    },
}

impl fmt::Display for IngestionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionWarning::EmptyInput => f.write_str("file is empty"),
            IngestionWarning::HeaderOnly { columns } => {
                write!(f, "file has a header ({columns} columns) but no data rows")
            }
            IngestionWarning::RaggedRows { count } => {
                write!(f, "{count} row(s) do not match the header width")
            }
            IngestionWarning::InvalidUtf8 { lines } => {
                write!(f, "{lines} line(s) are not valid UTF-8 and were decoded lossily")
            }
        }
    }
}

impl IngestionWarning {
    /// Warnings for a freshly ingested dataset.
    pub(crate) fn collect(stats: IngestionStats) -> Vec<IngestionWarning> {
        if stats.columns == 0 {
            return vec![IngestionWarning::EmptyInput];
        }
        let mut out = Vec::new();
        if stats.rows == 0 {
            out.push(IngestionWarning::HeaderOnly {
                columns: stats.columns,
            });
        }
        if stats.ragged_rows > 0 {
            out.push(IngestionWarning::RaggedRows {
                count: stats.ragged_rows,
            });
        }
        if stats.invalid_utf8_lines > 0 {
            out.push(IngestionWarning::InvalidUtf8 {
                lines: stats.invalid_utf8_lines,
            });
        }
        out
    }
}

/// Receives the outcome of each CSV load.
///
/// A UI would show warnings and failures to the user; [`TracingObserver`] logs them.
pub trait IngestionObserver: Send + Sync {
    /// The file loaded.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called once per warning, after `on_success`.
    fn on_warning(&self, _ctx: &IngestionContext, _warning: &IngestionWarning) {}

    /// The file did not load.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// A failure at or above [`super::IngestionOptions::alert_at_or_above`]. Forwards to
    /// [`Self::on_failure`] unless overridden.
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards every callback to each inner observer in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_warning(&self, ctx: &IngestionContext, warning: &IngestionWarning) {
        for o in &self.observers {
            o.on_warning(ctx, warning);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits ingestion events as `tracing` events under the `ingest` target.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            target: "ingest",
            source = %ctx.source,
            rows = stats.rows,
            columns = stats.columns,
            ragged_rows = stats.ragged_rows,
            invalid_utf8_lines = stats.invalid_utf8_lines,
            "csv loaded"
        );
    }

    fn on_warning(&self, ctx: &IngestionContext, warning: &IngestionWarning) {
        tracing::warn!(target: "ingest", source = %ctx.source, "{warning}");
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        tracing::error!(target: "ingest", source = %ctx.source, ?severity, "csv load failed: {error}");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        tracing::error!(target: "ingest", source = %ctx.source, ?severity, alert = true, "csv load failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::{IngestionStats, IngestionWarning};

    fn stats(rows: usize, columns: usize, ragged_rows: usize) -> IngestionStats {
        IngestionStats {
            rows,
            columns,
            ragged_rows,
            invalid_utf8_lines: 0,
        }
    }

    #[test]
    fn empty_input_is_the_only_warning_without_a_header() {
        assert_eq!(
            IngestionWarning::collect(stats(0, 0, 0)),
            vec![IngestionWarning::EmptyInput]
        );
    }

    #[test]
    fn header_only_and_ragged_rows_are_reported() {
        assert_eq!(
            IngestionWarning::collect(stats(0, 3, 0)),
            vec![IngestionWarning::HeaderOnly { columns: 3 }]
        );
        assert_eq!(
            IngestionWarning::collect(stats(5, 3, 2)),
            vec![IngestionWarning::RaggedRows { count: 2 }]
        );
        assert!(IngestionWarning::collect(stats(5, 3, 0)).is_empty());
    }

    #[test]
    fn lossy_decoding_is_reported_after_shape_warnings() {
        let stats = IngestionStats {
            invalid_utf8_lines: 4,
            ..stats(5, 3, 1)
        };
        assert_eq!(
            IngestionWarning::collect(stats),
            vec![
                IngestionWarning::RaggedRows { count: 1 },
                IngestionWarning::InvalidUtf8 { lines: 4 }
            ]
        );
        assert_eq!(
            IngestionWarning::InvalidUtf8 { lines: 4 }.to_string(),
            "4 line(s) are not valid UTF-8 and were decoded lossily"
        );
    }
}
