use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::InstrumentId;

/// One dated value of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Calendar date; serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Finite value observed on `date`.
    pub value: f64,
}

impl Observation {
    /// Construct an observation.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Date-ordered observations for one instrument.
///
/// Invariants upheld by every constructor:
/// - dates are strictly increasing (no duplicates);
/// - every value is finite.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Build a series from observations in any order.
    ///
    /// Non-finite values are discarded, the rest are sorted by date and, for
    /// a repeated date, the observation that came first in `obs` is kept.
    pub fn from_observations<I>(obs: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        Self::build(obs).0
    }

    /// Same as [`Series::from_observations`], also returning how many
    /// observations were discarded as duplicate dates.
    pub(crate) fn build<I>(obs: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut observations: Vec<Observation> =
            obs.into_iter().filter(|o| o.value.is_finite()).collect();
        // Stable sort keeps source order among equal dates, so dedup keeps the first.
        observations.sort_by_key(|o| o.date);
        let before = observations.len();
        observations.dedup_by_key(|o| o.date);
        let dropped = before - observations.len();
        (Self { observations }, dropped)
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true when the series holds no observation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in ascending date order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterate observations in ascending date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|o| o.date)
    }

    /// Values in date order, as a flat numeric series.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Latest observation.
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

/// Normalized series keyed by instrument, iterated in lexicographic order.
pub type Corpus = BTreeMap<InstrumentId, Series>;
