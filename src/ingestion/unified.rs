//! Observed ingestion entrypoints.
//!
//! [`ingest_from_path`] and [`ingest_from_str`] wrap the plain readers in [`super::csv`] and,
//! when an [`IngestionObserver`] is configured, report:
//!
//! - `on_success` with row/column stats, followed by one `on_warning` per [`IngestionWarning`]
//! - `on_failure` with a computed severity
//! - `on_alert` when that severity is >= [`IngestionOptions::alert_at_or_above`]

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::csv::{CsvReport, read_csv, read_csv_path};
use super::observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionSource, IngestionStats, IngestionWarning,
};

/// Who hears about a load, and which failures count as alerts.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Receives success, warning and failure callbacks.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Failures at or above this severity also trigger `on_alert`.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observed", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Ingest a CSV file, reporting the outcome to `options.observer`.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use csv_chart_shaper::ingestion::{ingest_from_path, IngestionOptions, TracingObserver};
///
/// # fn main() -> Result<(), csv_chart_shaper::IngestionError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("sales.csv", &opts)?;
/// assert!(!ds.columns.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        source: IngestionSource::Path(path.to_path_buf()),
    };
    observe(&ctx, options, read_csv_path(path))
}

/// Ingest in-memory CSV text, reporting the outcome to `options.observer`.
///
/// `name` only identifies the input in observer callbacks (e.g. the uploaded file's name).
pub fn ingest_from_str(name: &str, input: &str, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let ctx = IngestionContext {
        source: IngestionSource::Inline(name.to_owned()),
    };
    observe(&ctx, options, read_csv(input.as_bytes()))
}

fn observe(
    ctx: &IngestionContext,
    options: &IngestionOptions,
    result: IngestionResult<CsvReport>,
) -> IngestionResult<DataSet> {
    match &result {
        Ok(report) => {
            let stats = IngestionStats {
                rows: report.dataset.row_count(),
                columns: report.dataset.columns.len(),
                ragged_rows: report.ragged_rows,
                invalid_utf8_lines: report.invalid_utf8_lines,
            };
            tracing::debug!(source = %ctx.source, rows = stats.rows, columns = stats.columns, "csv ingested");
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(ctx, stats);
                for warning in IngestionWarning::collect(stats) {
                    obs.on_warning(ctx, &warning);
                }
            }
        }
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                let sev = severity_for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }

    result.map(|report| report.dataset)
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
    }
}
