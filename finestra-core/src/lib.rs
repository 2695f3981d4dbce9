//! finestra-core
//!
//! Ingestion, alignment and windowed statistics for daily price series.
//!
//! - `series`: the normalized `Series` and the `Corpus` keyed by instrument.
//! - `timeseries`: source normalization, corpus loading, date alignment and
//!   window decomposition.
//! - `stats`: numeric coercion, moments, strict extrema and per-window
//!   statistics.
//! - `types`: re-exports of the shared error, config and report types.
//!
//! Every operation is a synchronous pure function over borrowed input. With
//! the `tracing` feature enabled, public entry points emit spans and the
//! normalizer logs sources whose columns could not be recognized.
#![warn(missing_docs)]

/// Normalized series and corpus containers.
pub mod series;
pub mod stats;
pub mod timeseries;
pub mod types;

pub use series::{Corpus, Observation, Series};
pub use stats::coerce::{RawValue, ToNumber, to_number};
pub use stats::extrema::{count_peaks, count_troughs, peak_indices, trough_indices};
pub use stats::moments::{mean, range, standard_deviation, variance};
pub use stats::windowed::{WindowStatistic, stats_per_window, summarize_windows};
pub use timeseries::align::{AlignedMatrix, build_matrix, intersect_dates};
pub use timeseries::corpus::load_corpus;
pub use timeseries::coverage::coverage;
pub use timeseries::normalize::{
    HeaderRole, header_role, normalize, normalize_date, normalize_value, normalize_with_report,
};
pub use timeseries::util::detect_delimiter;
pub use timeseries::wide::normalize_wide;
pub use timeseries::window::{Window, window_count, windows};
pub use types::*;
