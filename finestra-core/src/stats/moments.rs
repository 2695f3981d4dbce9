use crate::stats::coerce::{ToNumber, finite_values};
use crate::types::ValueRange;

fn mean_of(nums: &[f64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = nums.len() as f64;
    Some(nums.iter().sum::<f64>() / n)
}

fn variance_of(nums: &[f64], use_sample: bool) -> Option<f64> {
    let n = nums.len();
    if n == 0 || (use_sample && n < 2) {
        return None;
    }
    let m = mean_of(nums)?;
    let sum_sq_diff: f64 = nums.iter().map(|v| (v - m) * (v - m)).sum();
    #[allow(clippy::cast_precision_loss)]
    let denom = (if use_sample { n - 1 } else { n }) as f64;
    Some(sum_sq_diff / denom)
}

/// Arithmetic mean of the finite coerced values.
///
/// Returns `NaN` when no finite value remains; an empty input is an undefined
/// statistic, not an error.
///
/// ```
/// use finestra_core::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert!((mean(&["$4.00", "2", "3.00"]) - 3.0).abs() < 1e-12);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
#[must_use]
pub fn mean<T: ToNumber>(values: &[T]) -> f64 {
    mean_of(&finite_values(values)).unwrap_or(f64::NAN)
}

/// Population (`use_sample = false`, divide by `n`) or sample (divide by
/// `n - 1`) variance of the finite coerced values.
///
/// `NaN` when no finite value remains, or when `use_sample` is set and fewer
/// than two remain.
#[must_use]
pub fn variance<T: ToNumber>(values: &[T], use_sample: bool) -> f64 {
    variance_of(&finite_values(values), use_sample).unwrap_or(f64::NAN)
}

/// Square root of [`variance`]; `NaN` propagates.
#[must_use]
pub fn standard_deviation<T: ToNumber>(values: &[T], use_sample: bool) -> f64 {
    variance_of(&finite_values(values), use_sample).map_or(f64::NAN, f64::sqrt)
}

/// `{min, max}` over the finite coerced values, or [`ValueRange::UNDEFINED`].
///
/// Typically applied to a column of per-window statistics, e.g. the range of
/// window means across every window of a series.
#[must_use]
pub fn range<T: ToNumber>(values: &[T]) -> ValueRange {
    let nums = finite_values(values);
    let Some(&first) = nums.first() else {
        return ValueRange::UNDEFINED;
    };
    let (min, max) = nums
        .iter()
        .skip(1)
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    ValueRange { min, max }
}
