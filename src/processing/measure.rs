//! What a transform adds up or plots.

use crate::types::{DataSet, Value, cell};

use super::coerce::CoercionPolicy;

/// Label used for [`Measure::Count`] wherever a series needs a name.
pub const COUNT_LABEL: &str = "count";

/// The per-row quantity a transform consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure<'a> {
    /// The coerced cell of the named column.
    Column(&'a str),
    /// Every row contributes `1`.
    Count,
}

impl<'a> Measure<'a> {
    /// `Column(name)` when a column is selected, `Count` otherwise.
    pub fn from_selection(column: Option<&'a str>) -> Self {
        column.map(Measure::Column).unwrap_or(Measure::Count)
    }

    /// Series name: the column name, or [`COUNT_LABEL`].
    pub fn label(&self) -> &'a str {
        match *self {
            Measure::Column(name) => name,
            Measure::Count => COUNT_LABEL,
        }
    }

    /// One value per row, in dataset order.
    pub fn values(&self, dataset: &DataSet, policy: CoercionPolicy) -> Vec<Value> {
        match self {
            Measure::Column(name) => super::coerce::column_values(dataset, name, policy),
            Measure::Count => vec![Value::Number(1.0); dataset.row_count()],
        }
    }

    /// Resolves the column once and returns a per-row reader of numeric contributions.
    ///
    /// Text counts as zero.
    pub(crate) fn reader(&self, dataset: &DataSet, policy: CoercionPolicy) -> MeasureReader {
        match self {
            Measure::Column(name) => MeasureReader {
                idx: dataset.column_index(name),
                count: false,
                policy,
            },
            Measure::Count => MeasureReader {
                idx: None,
                count: true,
                policy,
            },
        }
    }
}

impl<'a> From<&'a str> for Measure<'a> {
    fn from(column: &'a str) -> Self {
        Measure::Column(column)
    }
}

pub(crate) struct MeasureReader {
    idx: Option<usize>,
    count: bool,
    policy: CoercionPolicy,
}

impl MeasureReader {
    pub(crate) fn amount(&self, row: &[String]) -> f64 {
        if self.count {
            return 1.0;
        }
        self.policy.number(cell(row, self.idx)).unwrap_or(0.0)
    }
}
