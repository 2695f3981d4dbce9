use serde::Serialize;

/// A contiguous copy of part of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window<T> {
    /// Offset of the first element in the source series.
    pub start: usize,
    /// Copied elements; always exactly the requested window size.
    pub values: Vec<T>,
}

impl<T> Window<T> {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true for a zero-length window (never produced by [`windows`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

/// Number of full windows of `window_size` that fit in `len` elements when
/// stepping by `step`: `floor((len - window_size) / step) + 1`, or `0` when the
/// parameters are degenerate.
#[must_use]
pub const fn window_count(len: usize, window_size: usize, step: usize) -> usize {
    if window_size == 0 || step == 0 || len < window_size {
        return 0;
    }
    (len - window_size) / step + 1
}

/// Decompose `series` into full windows of `window_size`, starting at offsets
/// `0, step, 2 * step, ...`.
///
/// Overlapping (`step < window_size`), tiling (`step == window_size`) and
/// skipping (`step > window_size`) decompositions are all valid. Trailing
/// partial windows are never produced. Degenerate parameters (a zero size or
/// step, or a series shorter than one window) yield an empty list.
///
/// ```
/// use finestra_core::windows;
///
/// let w = windows(&[1, 2, 3, 4, 5, 6], 3, 3);
/// assert_eq!(w.len(), 2);
/// assert_eq!(w[1].values, vec![4, 5, 6]);
/// ```
#[must_use]
pub fn windows<T: Clone>(series: &[T], window_size: usize, step: usize) -> Vec<Window<T>> {
    let count = window_count(series.len(), window_size, step);
    (0..count)
        .map(|k| {
            let start = k * step;
            Window {
                start,
                values: series[start..start + window_size].to_vec(),
            }
        })
        .collect()
}
