//! `csv-chart-shaper` turns a loaded CSV file into ready-to-render chart payloads.
//!
//! It is the data-shaping layer of a CSV exploration widget: the CSV is read into a
//! [`types::DataSet`] of raw strings, and [`chart::select_chart_payload`] shapes it for one of
//! eleven chart kinds according to the user's column selection. Drawing is left to an external
//! renderer; the payloads serialize to the JSON that renderer expects.
//!
//! ## Chart kinds
//!
//! | kind | surface | transform |
//! |---|---|---|
//! | `scatter`, `linechart`, `bubble` | declarative | per-row x/y(/size) points |
//! | `barchart` | declarative | [`processing::aggregate_sum`] |
//! | `histogram` | declarative | [`processing::column_values`] of y |
//! | `heatmap` | declarative | [`processing::build_category_matrix`] |
//! | `pie` | canvas | [`processing::aggregate_sum`] |
//! | `radar`, `area`, `treemap` | canvas | [`processing::column_values`] of x and y |
//! | `waterfall` | canvas | [`processing::cumulative_sum`] |
//!
//! ## Type coercion
//!
//! Cells are coerced per use, not at ingest, with a [`processing::CoercionPolicy`]:
//! [`Strict`](processing::CoercionPolicy::Strict) (default) only accepts whole-string numbers,
//! [`LeadingPrefix`](processing::CoercionPolicy::LeadingPrefix) reads a numeric prefix the way a
//! browser's `parseFloat` does. Non-numeric cells count as zero in sums and stay text elsewhere.
//!
//! ## Quick example
//!
//! ```rust
//! use csv_chart_shaper::chart::{select_chart_payload, ChartKind, ChartSelection, RenderOptions};
//! use csv_chart_shaper::ingestion::csv::ingest_csv_from_str;
//!
//! let ds = ingest_csv_from_str("month,delta\njan,5\nfeb,-2\nmar,4\n").unwrap();
//! let selection = ChartSelection::new(ChartKind::Waterfall)
//!     .with_x("month")
//!     .with_y("delta");
//!
//! let payload = select_chart_payload(&ds, &selection, &RenderOptions::default()).unwrap();
//! let json = serde_json::to_value(&payload).unwrap();
//! assert_eq!(json["type"], "bar");
//! assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([5.0, 3.0, 7.0]));
//! ```
//!
//! Nothing renders when the dataset is empty or the selection is incomplete:
//!
//! ```rust
//! use csv_chart_shaper::chart::{select_chart_payload, ChartKind, ChartSelection, RenderOptions};
//! use csv_chart_shaper::types::DataSet;
//!
//! let selection = ChartSelection::new(ChartKind::Bar).with_x("a").with_y("b");
//! assert!(select_chart_payload(&DataSet::default(), &selection, &RenderOptions::default()).is_none());
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV reading and ingestion observers
//! - [`types`]: dataset and value types
//! - [`processing`]: coercion and the data-shaping transforms
//! - [`chart`]: chart kinds, selections and renderer payloads
//! - [`session`]: owned "current dataset + selection" state for a UI
//! - [`error`]: error types

pub mod chart;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod session;
pub mod types;

pub use error::{IngestionError, IngestionResult};
