//! Per-cell coercion from raw strings to [`Value`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCoercionPolicyError;
use crate::types::{DataSet, Value};

/// How a raw cell is recognised as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// The whole (trimmed) string must be a finite decimal number. `"12abc"` stays text.
    #[default]
    Strict,
    /// The longest numeric prefix is used, like a browser `parseFloat`. `"12abc"` becomes `12`
    /// and `"Infinity"` becomes `+∞`.
    #[serde(rename = "prefix")]
    LeadingPrefix,
}

impl CoercionPolicy {
    /// Coerce one raw cell.
    ///
    /// Returns [`Value::Number`] when the cell is numeric under this policy, otherwise the
    /// original string unchanged as [`Value::Text`].
    pub fn coerce(self, raw: &str) -> Value {
        match self.number(raw) {
            Some(n) => Value::Number(n),
            None => Value::Text(raw.to_owned()),
        }
    }

    /// Numeric reading of `raw`, or `None` when it is not a number under this policy.
    pub fn number(self, raw: &str) -> Option<f64> {
        match self {
            CoercionPolicy::Strict => strict_number(raw),
            CoercionPolicy::LeadingPrefix => leading_number(raw),
        }
    }
}

impl fmt::Display for CoercionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionPolicy::Strict => f.write_str("strict"),
            CoercionPolicy::LeadingPrefix => f.write_str("prefix"),
        }
    }
}

impl FromStr for CoercionPolicy {
    type Err = ParseCoercionPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CoercionPolicy::Strict),
            "prefix" | "leading-prefix" => Ok(CoercionPolicy::LeadingPrefix),
            _ => Err(ParseCoercionPolicyError(s.to_owned())),
        }
    }
}

/// Coerce a raw cell with the default [`CoercionPolicy::Strict`] policy.
///
/// ```rust
/// use csv_chart_shaper::processing::coerce;
/// use csv_chart_shaper::types::Value;
///
/// assert_eq!(coerce("42.5"), Value::Number(42.5));
/// assert_eq!(coerce("12abc"), Value::Text("12abc".to_string()));
/// ```
pub fn coerce(raw: &str) -> Value {
    CoercionPolicy::Strict.coerce(raw)
}

impl Value {
    /// Run an already-coerced value through `policy` again.
    ///
    /// Numbers come back unchanged and text is re-read, so applying this to the output of
    /// [`column_values`] is a no-op.
    pub fn coerced(&self, policy: CoercionPolicy) -> Value {
        match self {
            Value::Number(_) => self.clone(),
            Value::Text(s) => policy.coerce(s),
        }
    }
}

/// Coerce every cell of `column`, preserving dataset order.
///
/// Cells missing from ragged rows (and every cell of an unknown column) coerce from `""` and so
/// come back as empty text.
pub fn column_values(dataset: &DataSet, column: &str, policy: CoercionPolicy) -> Vec<Value> {
    dataset.column(column).map(|raw| policy.coerce(raw)).collect()
}

fn strict_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    // `f64::from_str` also accepts "inf"/"NaN"/"infinity", none of which carry a digit.
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            end = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}
