//! CSV ingestion.
//!
//! Most callers should use [`ingest_from_path`] or [`ingest_from_str`] (from [`unified`]) which:
//!
//! - read the text into an in-memory [`crate::types::DataSet`] of raw strings
//! - optionally report success/warnings/failure/alerts to an [`IngestionObserver`]
//!
//! The unobserved readers live in [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionSource, IngestionStats,
    IngestionWarning, TracingObserver,
};
pub use unified::{IngestionOptions, ingest_from_path, ingest_from_str};
