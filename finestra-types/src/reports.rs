//! Report envelopes produced by the core helpers and the orchestrator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::instrument::InstrumentId;

/// Row accounting for one normalized source.
///
/// Dropped rows are not errors; this report lets callers surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Data rows read after the header (blank lines excluded).
    pub rows_read: usize,
    /// Observations kept in the resulting series.
    pub rows_kept: usize,
    /// Rows without a resolvable date or a finite value.
    pub rows_dropped: usize,
    /// Rows discarded because an earlier row already carried the same date.
    pub duplicates_dropped: usize,
    /// Delimiter inferred from the header line.
    pub delimiter: char,
}

/// Serde adapter writing non-finite floats as `null` and reading `null` back
/// as `NaN`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            s.serialize_some(v)
        } else {
            s.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

/// Inclusive `{min, max}` over finite values; both `NaN` when none remain.
///
/// Undefined bounds serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest finite value.
    #[serde(with = "nan_as_null")]
    pub min: f64,
    /// Largest finite value.
    #[serde(with = "nan_as_null")]
    pub max: f64,
}

impl ValueRange {
    /// The undefined range reported when no finite value is available.
    pub const UNDEFINED: Self = Self {
        min: f64::NAN,
        max: f64::NAN,
    };

    /// Returns true when both bounds are finite.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Aggregate over every window of one decomposition of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Window length.
    pub window_size: usize,
    /// Offset between consecutive window starts.
    pub step: usize,
    /// Number of windows produced.
    pub num_windows: usize,
    /// Range of per-window means.
    pub range_of_means: ValueRange,
    /// Range of per-window standard deviations.
    pub range_of_stddevs: ValueRange,
    /// Sum of per-window peak counts.
    pub total_peaks: usize,
    /// Sum of per-window trough counts.
    pub total_troughs: usize,
}

/// Overlapping and non-overlapping summaries for one window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSizeSummary {
    /// Summary stepping by the configured overlap step.
    pub overlapping: WindowSummary,
    /// Summary stepping by the window size (disjoint tiling).
    pub non_overlapping: WindowSummary,
}

/// All window summaries computed for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSummary {
    /// Instrument identifier.
    pub instrument: InstrumentId,
    /// Display label resolved through the configured mapping.
    pub display_name: String,
    /// Number of observations in the instrument's series.
    pub points: usize,
    /// One entry per configured window size not exceeding `points`.
    pub windows: Vec<WindowSizeSummary>,
}

/// Row count and date span of one instrument's series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesCoverage {
    /// Instrument identifier.
    pub instrument: InstrumentId,
    /// Number of observations.
    pub rows: usize,
    /// First observation date, if any.
    pub first: Option<NaiveDate>,
    /// Last observation date, if any.
    pub last: Option<NaiveDate>,
}

/// Inclusive date span shared by every non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    /// Latest first date across non-empty series.
    pub start: NaiveDate,
    /// Earliest last date across non-empty series.
    pub end: NaiveDate,
}

/// Per-instrument coverage plus the global overlap window.
///
/// An overlap window only bounds the candidate dates; the aligned intersection
/// can still be empty when an instrument has gaps inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Entries in lexicographic instrument order.
    pub entries: Vec<SeriesCoverage>,
    /// `None` when every series is empty or the spans do not overlap.
    pub overlap: Option<OverlapWindow>,
}

impl CoverageReport {
    /// Returns true when every series parsed to zero rows.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.entries.iter().all(|e| e.rows == 0)
    }
}

/// Short description of an aligned matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRecap {
    /// First aligned date.
    pub start: NaiveDate,
    /// Last aligned date.
    pub end: NaiveDate,
    /// Number of instruments (columns).
    pub instruments: usize,
    /// Number of aligned dates (rows).
    pub points: usize,
    /// Display labels in column order.
    pub display_names: Vec<String>,
}
