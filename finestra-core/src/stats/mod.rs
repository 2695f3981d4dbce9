//! Descriptive statistics over loosely typed numeric series.
//!
//! Modules include:
//! - `coerce`: the `ToNumber` coercion applied before any statistic
//! - `moments`: mean, variance, standard deviation, range
//! - `extrema`: strict interior peak/trough detection
//! - `windowed`: per-window statistics and their summaries
//!
//! Degenerate inputs never fail; they surface as `NaN` at the result boundary.
/// Numeric coercion of heterogeneous values.
pub mod coerce;
/// Strict local extrema.
pub mod extrema;
/// Central moments and ranges.
pub mod moments;
/// Statistics computed per window.
pub mod windowed;
