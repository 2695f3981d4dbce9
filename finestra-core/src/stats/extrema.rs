//! Strict local extrema over interior positions.
//!
//! Only indices `1..=len-2` are candidates; endpoints never count. A peak is
//! strictly greater than both neighbours, a trough strictly smaller, so a
//! plateau is neither. Entries that do not coerce to a finite number compare
//! false against everything: they are never an extremum and never let a
//! neighbour become one. Positions are not compacted.

use crate::stats::coerce::ToNumber;

fn interior_matches<T, F>(values: &[T], predicate: F) -> Vec<usize>
where
    T: ToNumber,
    F: Fn(f64, f64, f64) -> bool,
{
    if values.len() < 3 {
        return Vec::new();
    }
    let nums: Vec<Option<f64>> = values.iter().map(ToNumber::to_number).collect();
    nums.windows(3)
        .enumerate()
        .filter_map(|(k, w)| match (w[0], w[1], w[2]) {
            (Some(prev), Some(cur), Some(next)) if predicate(prev, cur, next) => Some(k + 1),
            _ => None,
        })
        .collect()
}

/// Indices of strict local maxima.
#[must_use]
pub fn peak_indices<T: ToNumber>(values: &[T]) -> Vec<usize> {
    interior_matches(values, |prev, cur, next| cur > prev && cur > next)
}

/// Indices of strict local minima.
#[must_use]
pub fn trough_indices<T: ToNumber>(values: &[T]) -> Vec<usize> {
    interior_matches(values, |prev, cur, next| cur < prev && cur < next)
}

/// Number of strict local maxima.
///
/// ```
/// use finestra_core::count_peaks;
///
/// assert_eq!(count_peaks(&[1, 3, 2, 5, 4, 6, 5, 7, 6]), 4);
/// ```
#[must_use]
pub fn count_peaks<T: ToNumber>(values: &[T]) -> usize {
    peak_indices(values).len()
}

/// Number of strict local minima.
#[must_use]
pub fn count_troughs<T: ToNumber>(values: &[T]) -> usize {
    trough_indices(values).len()
}
