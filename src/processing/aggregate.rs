//! Group-by sums for bar and pie charts.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{DataSet, cell, json_number};

use super::coerce::CoercionPolicy;
use super::measure::Measure;

/// Sum of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSum {
    /// Raw value of the grouping column.
    pub key: String,
    /// Sum of the measure over the group's rows.
    #[serde(serialize_with = "json_number::number")]
    pub sum: f64,
}

/// Group rows by the raw string in `group_column` and sum `measure` per group.
///
/// - Groups come back in first-seen order.
/// - Non-numeric cells contribute `0`.
/// - Rows missing the grouping cell fall into the `""` group.
///
/// ```rust
/// use csv_chart_shaper::processing::{aggregate_sum, CoercionPolicy};
/// use csv_chart_shaper::types::DataSet;
///
/// let ds = DataSet::new(
///     vec!["g".into(), "v".into()],
///     vec![
///         vec!["a".into(), "1".into()],
///         vec!["b".into(), "2".into()],
///         vec!["a".into(), "3".into()],
///     ],
/// );
/// let sums = aggregate_sum(&ds, "g", "v", CoercionPolicy::Strict);
/// assert_eq!(sums[0].key, "a");
/// assert_eq!(sums[0].sum, 4.0);
/// assert_eq!(sums[1].sum, 2.0);
/// ```
pub fn aggregate_sum<'a>(
    dataset: &DataSet,
    group_column: &str,
    measure: impl Into<Measure<'a>>,
    policy: CoercionPolicy,
) -> Vec<GroupSum> {
    let reader = measure.into().reader(dataset, policy);
    let group_idx = dataset.column_index(group_column);

    let mut out: Vec<GroupSum> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for row in &dataset.rows {
        let key = cell(row, group_idx);
        let amount = reader.amount(row);
        match positions.get(key) {
            Some(&pos) => out[pos].sum += amount,
            None => {
                positions.insert(key, out.len());
                out.push(GroupSum {
                    key: key.to_owned(),
                    sum: amount,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{GroupSum, aggregate_sum};
    use crate::processing::{CoercionPolicy, Measure};
    use crate::types::DataSet;

    fn dataset(rows: &[(&str, &str)]) -> DataSet {
        DataSet::new(
            vec!["g".to_string(), "v".to_string()],
            rows.iter()
                .map(|(g, v)| vec![g.to_string(), v.to_string()])
                .collect(),
        )
    }

    fn sum(key: &str, sum: f64) -> GroupSum {
        GroupSum {
            key: key.to_string(),
            sum,
        }
    }

    #[test]
    fn sums_in_first_seen_order() {
        let ds = dataset(&[("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(
            aggregate_sum(&ds, "g", "v", CoercionPolicy::Strict),
            vec![sum("a", 4.0), sum("b", 2.0)]
        );
    }

    #[test]
    fn non_numeric_values_count_as_zero() {
        let ds = dataset(&[("b", "n/a"), ("a", "2.5"), ("b", "1")]);
        assert_eq!(
            aggregate_sum(&ds, "g", "v", CoercionPolicy::Strict),
            vec![sum("b", 1.0), sum("a", 2.5)]
        );
    }

    #[test]
    fn count_measure_counts_rows_per_group() {
        let ds = dataset(&[("x", "9"), ("y", "9"), ("x", "9"), ("x", "9")]);
        assert_eq!(
            aggregate_sum(&ds, "g", Measure::Count, CoercionPolicy::Strict),
            vec![sum("x", 3.0), sum("y", 1.0)]
        );
    }

    #[test]
    fn empty_dataset_has_no_groups() {
        let ds = dataset(&[]);
        assert!(aggregate_sum(&ds, "g", "v", CoercionPolicy::Strict).is_empty());
    }
}
