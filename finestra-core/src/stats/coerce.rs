//! Numeric coercion applied uniformly before any statistic.

use serde::{Deserialize, Serialize};

/// Currency symbols removed before parsing text as a number.
const CURRENCY_SYMBOLS: [char; 5] = ['$', '€', '£', '¥', '₹'];

/// Parse price-like text such as `"$1,234.50"` or `" 42 "`.
///
/// Currency symbols, thousands separators and whitespace are removed before
/// parsing; non-finite results (`inf`, `NaN`) are rejected.
#[must_use]
pub fn parse_numeric_text(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace() && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Anything that can be read as an optional finite number.
///
/// `None` means "no usable number": the value is skipped by every statistic
/// instead of being treated as zero.
pub trait ToNumber {
    /// Coerce to a finite `f64`, or `None`.
    fn to_number(&self) -> Option<f64>;
}

impl ToNumber for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self).filter(|v| v.is_finite())
    }
}

impl ToNumber for f32 {
    fn to_number(&self) -> Option<f64> {
        f64::from(*self).to_number()
    }
}

macro_rules! int_to_number {
    ($($t:ty),*) => {
        $(
            impl ToNumber for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

int_to_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToNumber for str {
    fn to_number(&self) -> Option<f64> {
        parse_numeric_text(self)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> Option<f64> {
        parse_numeric_text(self)
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(ToNumber::to_number)
    }
}

/// Loosely typed upstream value: a number, some text, or a hole.
///
/// Deserializes untagged, so JSON `3.5`, `"$3.50"` and `null` all map onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric value (may still be non-finite).
    Number(f64),
    /// Text, possibly currency-formatted.
    Text(String),
    /// Missing entry.
    Missing,
}

impl ToNumber for RawValue {
    fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => v.to_number(),
            Self::Text(s) => parse_numeric_text(s),
            Self::Missing => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for RawValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

/// Coerce a single value; see [`ToNumber`].
pub fn to_number<T: ToNumber + ?Sized>(value: &T) -> Option<f64> {
    value.to_number()
}

/// Finite coerced values, in input order, with unusable entries removed.
pub(crate) fn finite_values<T: ToNumber>(values: &[T]) -> Vec<f64> {
    values.iter().filter_map(ToNumber::to_number).collect()
}
