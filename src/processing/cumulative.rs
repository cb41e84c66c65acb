//! Running totals for waterfall charts.

use serde::Serialize;

use crate::types::{DataSet, cell, json_number};

use super::coerce::CoercionPolicy;
use super::measure::Measure;

/// One label and one running total per dataset row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CumulativeSeries {
    /// Raw x cells, positionally.
    pub labels: Vec<String>,
    /// Running total after each row.
    #[serde(serialize_with = "json_number::numbers")]
    pub values: Vec<f64>,
}

/// Walk the dataset in order and accumulate `measure` (text counts as `0`).
///
/// The output always has exactly one entry per row.
pub fn cumulative_sum<'a>(
    dataset: &DataSet,
    x_column: &str,
    measure: impl Into<Measure<'a>>,
    policy: CoercionPolicy,
) -> CumulativeSeries {
    let reader = measure.into().reader(dataset, policy);
    let x_idx = dataset.column_index(x_column);

    let mut out = CumulativeSeries {
        labels: Vec::with_capacity(dataset.row_count()),
        values: Vec::with_capacity(dataset.row_count()),
    };
    let mut total = 0.0;
    for row in &dataset.rows {
        total += reader.amount(row);
        out.labels.push(cell(row, x_idx).to_owned());
        out.values.push(total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::cumulative_sum;
    use crate::processing::{CoercionPolicy, Measure};
    use crate::types::DataSet;

    fn dataset(rows: &[(&str, &str)]) -> DataSet {
        DataSet::new(
            vec!["month".to_string(), "delta".to_string()],
            rows.iter()
                .map(|(x, v)| vec![x.to_string(), v.to_string()])
                .collect(),
        )
    }

    #[test]
    fn running_total_matches_input_length() {
        let ds = dataset(&[("jan", "1"), ("feb", "2"), ("mar", "3")]);
        let out = cumulative_sum(&ds, "month", "delta", CoercionPolicy::Strict);
        assert_eq!(out.labels, vec!["jan", "feb", "mar"]);
        assert_eq!(out.values, vec![1.0, 3.0, 6.0]);
    }

    #[test]
    fn text_contributes_nothing_but_still_emits_a_point() {
        let ds = dataset(&[("a", "10"), ("b", "-"), ("c", "-4")]);
        let out = cumulative_sum(&ds, "month", "delta", CoercionPolicy::Strict);
        assert_eq!(out.values, vec![10.0, 10.0, 6.0]);
        assert_eq!(out.labels.len(), 3);
    }

    #[test]
    fn count_measure_is_a_row_counter() {
        let ds = dataset(&[("a", "x"), ("a", "y")]);
        let out = cumulative_sum(&ds, "month", Measure::Count, CoercionPolicy::Strict);
        assert_eq!(out.values, vec![1.0, 2.0]);
    }
}
