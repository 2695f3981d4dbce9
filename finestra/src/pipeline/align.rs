use finestra_core::types::{CoverageReport, FinestraError, MatrixRecap};
use finestra_core::{AlignedMatrix, Corpus, build_matrix, coverage};

use crate::Finestra;

impl Finestra {
    /// Align a corpus on the dates every instrument shares.
    ///
    /// # Errors
    /// Returns `NoCommonDates` when no date is shared by every instrument,
    /// including when some instrument's series is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finestra::align",
            skip(self, corpus),
            fields(instruments = corpus.len()),
            err
        )
    )]
    pub fn align(&self, corpus: &Corpus) -> Result<AlignedMatrix, FinestraError> {
        let matrix = build_matrix(corpus);
        if matrix.is_empty() {
            #[cfg(feature = "tracing")]
            {
                let report = coverage(corpus);
                tracing::warn!(
                    empty = report.entries.iter().filter(|e| e.rows == 0).count(),
                    overlap = ?report.overlap,
                    "alignment produced no rows"
                );
            }
            return Err(FinestraError::NoCommonDates);
        }
        Ok(matrix)
    }

    /// Per-instrument row counts and date spans, plus their overlap.
    #[must_use]
    pub fn coverage(&self, corpus: &Corpus) -> CoverageReport {
        coverage(corpus)
    }

    /// Span, shape and column labels of an aligned matrix.
    ///
    /// # Errors
    /// Returns `NoCommonDates` for a matrix without rows.
    pub fn recap(&self, matrix: &AlignedMatrix) -> Result<MatrixRecap, FinestraError> {
        let (Some(&start), Some(&end)) = (matrix.dates.first(), matrix.dates.last()) else {
            return Err(FinestraError::NoCommonDates);
        };
        Ok(MatrixRecap {
            start,
            end,
            instruments: matrix.cols(),
            points: matrix.rows(),
            display_names: matrix
                .instrument_ids
                .iter()
                .map(|id| self.display_name(id))
                .collect(),
        })
    }
}
