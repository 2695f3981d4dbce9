use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::series::{Corpus, Series};
use crate::types::InstrumentId;

/// Dense N×M table restricted to dates shared by every instrument.
///
/// `values[i][j]` is instrument `instrument_ids[j]` observed on `dates[i]`.
/// Every cell is populated by construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AlignedMatrix {
    /// Aligned dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Column identifiers, lexicographic.
    pub instrument_ids: Vec<InstrumentId>,
    /// Row-major values.
    pub values: Vec<Vec<f64>>,
}

impl AlignedMatrix {
    /// Number of aligned dates (N).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of instruments (M).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.instrument_ids.len()
    }

    /// Returns true when no date is shared by every instrument.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Values of row `i` alongside its date.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<(NaiveDate, &[f64])> {
        Some((*self.dates.get(i)?, self.values.get(i)?.as_slice()))
    }

    /// Column of one instrument, in date order.
    #[must_use]
    pub fn column(&self, id: &InstrumentId) -> Option<Vec<f64>> {
        let j = self.instrument_ids.iter().position(|x| x == id)?;
        Some(self.values.iter().map(|row| row[j]).collect())
    }

    /// Indices of the first `n` rows.
    #[must_use]
    pub fn head(&self, n: usize) -> std::ops::Range<usize> {
        0..n.min(self.rows())
    }

    /// Indices of the last `n` rows that are not already in `head(n)`.
    #[must_use]
    pub fn tail(&self, n: usize) -> std::ops::Range<usize> {
        let rows = self.rows();
        let head_end = n.min(rows);
        rows.saturating_sub(n).max(head_end)..rows
    }
}

/// Dates present in every series, ascending.
///
/// Seeds from the first instrument in identifier order and intersects with
/// each other instrument. An empty corpus, or any empty series, yields an
/// empty list.
#[must_use]
pub fn intersect_dates(corpus: &Corpus) -> Vec<NaiveDate> {
    let mut series_iter = corpus.values();
    let Some(first) = series_iter.next() else {
        return Vec::new();
    };
    let mut common: HashSet<NaiveDate> = first.dates().collect();
    for s in series_iter {
        if common.is_empty() {
            break;
        }
        let dates: HashSet<NaiveDate> = s.dates().collect();
        common.retain(|d| dates.contains(d));
    }
    let mut out: Vec<NaiveDate> = common.into_iter().collect();
    out.sort_unstable();
    out
}

fn date_index(series: &Series) -> HashMap<NaiveDate, f64> {
    series.iter().map(|o| (o.date, o.value)).collect()
}

/// Build the aligned matrix for a corpus.
///
/// Each instrument's date index is built once, so filling the N×M cells is
/// linear in their number. Never fails; an empty intersection gives a matrix
/// with zero rows (the instrument list is still populated).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "finestra_core::build_matrix",
        level = "debug",
        skip(corpus),
        fields(instruments = corpus.len())
    )
)]
#[must_use]
pub fn build_matrix(corpus: &Corpus) -> AlignedMatrix {
    let instrument_ids: Vec<InstrumentId> = corpus.keys().cloned().collect();
    let indexes: Vec<HashMap<NaiveDate, f64>> = corpus.values().map(date_index).collect();

    // A row exists only when every index holds the date.
    let (dates, values): (Vec<NaiveDate>, Vec<Vec<f64>>) = intersect_dates(corpus)
        .into_iter()
        .filter_map(|d| {
            let row: Option<Vec<f64>> = indexes.iter().map(|idx| idx.get(&d).copied()).collect();
            row.map(|r| (d, r))
        })
        .unzip();

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = dates.len(), cols = instrument_ids.len(), "aligned matrix built");

    AlignedMatrix {
        dates,
        instrument_ids,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Observation;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series(points: &[(u32, f64)]) -> Series {
        points.iter().map(|&(day, v)| Observation::new(d(day), v)).collect()
    }

    #[test]
    fn head_and_tail_do_not_overlap() {
        let mut c = Corpus::new();
        c.insert("A".into(), series(&[(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)]));
        let m = build_matrix(&c);
        assert_eq!(m.head(3), 0..3);
        assert_eq!(m.tail(3), 3..4);
        assert_eq!(m.head(10), 0..4);
        assert_eq!(m.tail(10), 4..4);
    }

    #[test]
    fn column_follows_date_order() {
        let mut c = Corpus::new();
        c.insert("B".into(), series(&[(2, 20.0), (3, 30.0)]));
        c.insert("A".into(), series(&[(1, 1.0), (2, 2.0), (3, 3.0)]));
        let m = build_matrix(&c);
        assert_eq!(m.dates, vec![d(2), d(3)]);
        assert_eq!(m.column(&"b".into()), Some(vec![20.0, 30.0]));
        assert_eq!(m.row(0), Some((d(2), &[2.0, 20.0][..])));
        assert_eq!(m.column(&"zz".into()), None);
    }

    #[test]
    fn rows_hold_only_observed_values() {
        let mut c = Corpus::new();
        c.insert("A".into(), series(&[(1, 1.0), (2, 2.0), (4, 4.0)]));
        c.insert("B".into(), series(&[(2, 20.0), (3, 30.0), (4, 40.0)]));
        let m = build_matrix(&c);
        assert_eq!(m.dates, intersect_dates(&c));
        assert_eq!(m.values, vec![vec![2.0, 20.0], vec![4.0, 40.0]]);
        assert!(m.values.iter().flatten().all(|v| v.is_finite()));
    }
}
