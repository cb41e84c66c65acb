//! Core data model types.
//!
//! Ingestion produces a [`DataSet`]: the header's column names plus rows of raw strings. Cells
//! stay untyped until a chart transform asks for a [`Value`] through
//! [`crate::processing::CoercionPolicy`].

use std::fmt;

use serde::{Serialize, Serializer};

/// A coerced cell value.
///
/// Serializes untagged, so a number becomes a JSON number and text stays a JSON string.
/// Non-finite numbers become the strings `"Infinity"`, `"-Infinity"` and `"NaN"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The cell parsed as a number.
    Number(f64),
    /// The cell was left as its raw string.
    Text(String),
}

impl Value {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => json_number::number(n, serializer),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// `serialize_with` helpers for `f64` payload fields.
///
/// JSON has no infinities or NaN and serde_json would write `null` for them, which a renderer
/// reads as a missing point. These write finite numbers as numbers and the rest as strings.
pub(crate) mod json_number {
    use serde::Serializer;
    use serde::ser::SerializeSeq;

    pub(crate) fn number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if n.is_finite() {
            serializer.serialize_f64(*n)
        } else if n.is_nan() {
            serializer.serialize_str("NaN")
        } else if n.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub(crate) fn numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for n in values {
            seq.serialize_element(&Number(*n))?;
        }
        seq.end()
    }

    pub(crate) fn grid<S: Serializer>(rows: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(rows.len()))?;
        for row in rows {
            seq.serialize_element(&Row(row))?;
        }
        seq.end()
    }

    struct Number(f64);

    impl serde::Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            number(&self.0, serializer)
        }
    }

    struct Row<'a>(&'a [f64]);

    impl serde::Serialize for Row<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            numbers(self.0, serializer)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

/// In-memory tabular dataset of raw strings.
///
/// Rows are positional and zipped against [`DataSet::columns`]. A row may be shorter than the
/// header (a ragged CSV line); its missing cells read as `""`. File order is preserved and
/// nothing is deduplicated or sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    /// Header names in file order.
    pub columns: Vec<String>,
    /// Row-major raw values.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from header names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when there are no data rows (the header alone does not count).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of a column by name.
    ///
    /// When the header repeats a name, the last occurrence wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }

    /// Iterate the raw cells of `column`, one per row, in dataset order.
    ///
    /// Unknown columns and cells missing from ragged rows yield `""`.
    pub fn column<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let idx = self.column_index(name);
        self.rows.iter().map(move |row| cell(row, idx))
    }

    /// Number of rows that are shorter than the header.
    pub fn ragged_row_count(&self) -> usize {
        let width = self.columns.len();
        self.rows.iter().filter(|row| row.len() < width).count()
    }
}

/// Raw cell at `idx` in `row`, or `""` if the row has no such cell.
pub(crate) fn cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}
