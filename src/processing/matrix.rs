//! Category matrix for heatmaps.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{DataSet, cell, json_number};

use super::coerce::CoercionPolicy;

/// Grid indexed by the distinct values of two columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatrix {
    /// `values[i][j]` belongs to `x_labels[i]` and `y_labels[j]`.
    #[serde(serialize_with = "json_number::grid")]
    pub values: Vec<Vec<f64>>,
    /// Distinct x values in first-seen order.
    pub x_labels: Vec<String>,
    /// Distinct y values in first-seen order.
    pub y_labels: Vec<String>,
}

/// Build the heatmap grid for `x_column` × `y_column`.
///
/// Each cell is a lookup, not an aggregation: it holds the coerced `y_column` cell of the
/// *first* row whose x and y match that cell's labels exactly, and `0` when no row matches.
/// Later rows with the same (x, y) pair are ignored. Because the matching row's y cell equals
/// the y label, a present pair always reports the coerced label itself. A label that coerces to
/// text reports `0`.
///
/// The grid has `|x_labels| × |y_labels|` cells, so this is only meant for small categorical
/// domains.
pub fn build_category_matrix(
    dataset: &DataSet,
    x_column: &str,
    y_column: &str,
    policy: CoercionPolicy,
) -> CategoryMatrix {
    let x_idx = dataset.column_index(x_column);
    let y_idx = dataset.column_index(y_column);

    let mut x_pos: HashMap<&str, usize> = HashMap::new();
    let mut y_pos: HashMap<&str, usize> = HashMap::new();
    let mut x_labels: Vec<String> = Vec::new();
    let mut y_labels: Vec<String> = Vec::new();
    let mut present: HashSet<(usize, usize)> = HashSet::new();

    for row in &dataset.rows {
        let x = cell(row, x_idx);
        let y = cell(row, y_idx);
        let xi = *x_pos.entry(x).or_insert_with(|| {
            x_labels.push(x.to_owned());
            x_labels.len() - 1
        });
        let yi = *y_pos.entry(y).or_insert_with(|| {
            y_labels.push(y.to_owned());
            y_labels.len() - 1
        });
        present.insert((xi, yi));
    }

    let y_numbers: Vec<f64> = y_labels
        .iter()
        .map(|label| policy.number(label).unwrap_or(0.0))
        .collect();
    let values = (0..x_labels.len())
        .map(|xi| {
            y_numbers
                .iter()
                .enumerate()
                .map(|(yi, n)| if present.contains(&(xi, yi)) { *n } else { 0.0 })
                .collect()
        })
        .collect();

    tracing::trace!(
        x = x_labels.len(),
        y = y_labels.len(),
        rows = dataset.row_count(),
        "category matrix built"
    );

    CategoryMatrix {
        values,
        x_labels,
        y_labels,
    }
}
