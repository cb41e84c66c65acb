//! Data-shaping transforms.
//!
//! Everything here is a pure function over a [`crate::types::DataSet`]. Cells are coerced on
//! demand with a [`CoercionPolicy`], so the same raw string may be numeric for one chart and
//! categorical for another.
//!
//! Currently implemented:
//!
//! - [`coerce()`] / [`CoercionPolicy::coerce`]: raw string → [`crate::types::Value`]
//! - [`column_values()`]: coerce a whole column
//! - [`aggregate_sum()`]: group-by sum in first-seen key order
//! - [`build_category_matrix()`]: heatmap grid over two categorical columns
//! - [`cumulative_sum()`]: running totals (waterfall)
//!
//! ## Example: bar data from a CSV
//!
//! ```rust
//! use csv_chart_shaper::ingestion::csv::ingest_csv_from_str;
//! use csv_chart_shaper::processing::{aggregate_sum, cumulative_sum, CoercionPolicy};
//!
//! let ds = ingest_csv_from_str("region,sales\nnorth,10\nsouth,4\nnorth,n/a\nsouth,6\n").unwrap();
//!
//! // Text cells ("n/a") count as zero.
//! let bars = aggregate_sum(&ds, "region", "sales", CoercionPolicy::Strict);
//! assert_eq!(bars.iter().map(|g| g.sum).collect::<Vec<_>>(), vec![10.0, 10.0]);
//!
//! let running = cumulative_sum(&ds, "region", "sales", CoercionPolicy::Strict);
//! assert_eq!(running.values, vec![10.0, 14.0, 14.0, 20.0]);
//! ```

pub mod aggregate;
pub mod coerce;
pub mod cumulative;
pub mod matrix;
pub mod measure;

pub use aggregate::{GroupSum, aggregate_sum};
pub use coerce::{CoercionPolicy, coerce, column_values};
pub use cumulative::{CumulativeSeries, cumulative_sum};
pub use matrix::{CategoryMatrix, build_category_matrix};
pub use measure::{COUNT_LABEL, Measure};
