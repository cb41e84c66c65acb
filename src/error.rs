use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// Malformed rows never produce an error: ragged rows are accepted and short cells read as empty.
/// Only failures to obtain the text at all end up here.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (I/O while reading records).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Returned when a string does not name one of the supported chart kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart kind '{0}' (expected one of: scatter, barchart, linechart, histogram, heatmap, bubble, pie, radar, area, treemap, waterfall)")]
pub struct ParseChartKindError(pub String);

/// Returned when a string does not name a coercion policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coercion policy '{0}' (expected 'strict' or 'prefix')")]
pub struct ParseCoercionPolicyError(pub String);
