use serde::Serialize;

use crate::stats::coerce::ToNumber;
use crate::stats::extrema::{count_peaks, count_troughs};
use crate::stats::moments::{mean, range, standard_deviation};
use crate::timeseries::window::windows;
use crate::types::WindowSummary;

/// Descriptive statistics of one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStatistic {
    /// Offset of the window in the source series.
    pub start: usize,
    /// Number of elements in the window.
    pub length: usize,
    /// Mean of the finite values (`NaN` if none).
    pub mean: f64,
    /// Population or sample standard deviation (`NaN` when undefined).
    pub standard_deviation: f64,
    /// Strict interior local maxima.
    pub peak_count: usize,
    /// Strict interior local minima.
    pub trough_count: usize,
}

/// Run [`windows`] and compute a [`WindowStatistic`] for every window.
///
/// Pure: identical inputs always produce identical output.
///
/// ```
/// use finestra_core::stats_per_window;
///
/// let out = stats_per_window(&[1, 3, 2, 5, 4, 6, 5, 7, 6], 3, 1, false);
/// assert_eq!(out.len(), 7);
/// assert_eq!((out[2].peak_count, out[2].trough_count, out[2].length), (1, 0, 3));
/// ```
#[must_use]
pub fn stats_per_window<T>(
    series: &[T],
    window_size: usize,
    step: usize,
    use_sample_std: bool,
) -> Vec<WindowStatistic>
where
    T: ToNumber + Clone,
{
    windows(series, window_size, step)
        .into_iter()
        .map(|w| WindowStatistic {
            start: w.start,
            length: w.len(),
            mean: mean(&w.values),
            standard_deviation: standard_deviation(&w.values, use_sample_std),
            peak_count: count_peaks(&w.values),
            trough_count: count_troughs(&w.values),
        })
        .collect()
}

/// Collapse every window of one decomposition into ranges and totals.
#[must_use]
pub fn summarize_windows<T>(
    series: &[T],
    window_size: usize,
    step: usize,
    use_sample_std: bool,
) -> WindowSummary
where
    T: ToNumber + Clone,
{
    let stats = stats_per_window(series, window_size, step, use_sample_std);
    let means: Vec<f64> = stats.iter().map(|s| s.mean).collect();
    let stdevs: Vec<f64> = stats.iter().map(|s| s.standard_deviation).collect();
    WindowSummary {
        window_size,
        step,
        num_windows: stats.len(),
        range_of_means: range(&means),
        range_of_stddevs: range(&stdevs),
        total_peaks: stats.iter().map(|s| s.peak_count).sum(),
        total_troughs: stats.iter().map(|s| s.trough_count).sum(),
    }
}
