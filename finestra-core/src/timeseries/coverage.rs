use crate::series::Corpus;
use crate::types::{CoverageReport, OverlapWindow, SeriesCoverage};

/// Per-instrument row counts and date bounds, plus the window every
/// non-empty series covers.
///
/// The overlap is `[max first, min last]` over non-empty series and is `None`
/// when those bounds cross. An empty series contributes an entry with no
/// bounds and is ignored for the overlap.
#[must_use]
pub fn coverage(corpus: &Corpus) -> CoverageReport {
    let entries: Vec<SeriesCoverage> = corpus
        .iter()
        .map(|(id, s)| SeriesCoverage {
            instrument: id.clone(),
            rows: s.len(),
            first: s.first().map(|o| o.date),
            last: s.last().map(|o| o.date),
        })
        .collect();

    let start = entries.iter().filter_map(|e| e.first).max();
    let end = entries.iter().filter_map(|e| e.last).min();
    let overlap = match (start, end) {
        (Some(start), Some(end)) if start <= end => Some(OverlapWindow { start, end }),
        _ => None,
    };

    CoverageReport { entries, overlap }
}
