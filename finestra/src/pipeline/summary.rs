use finestra_core::types::{InstrumentSummary, WindowSizeSummary};
use finestra_core::{Corpus, summarize_windows};

use crate::Finestra;

impl Finestra {
    /// Window summaries for one instrument's values.
    ///
    /// For each configured window size not exceeding the series length, an
    /// overlapping pass (stepping by the configured overlap step) and a
    /// non-overlapping pass (stepping by the window size) are summarized.
    #[must_use]
    pub fn summarize_values(&self, values: &[f64]) -> Vec<WindowSizeSummary> {
        let cfg = &self.cfg.summary;
        cfg.window_sizes
            .iter()
            .copied()
            .filter(|&size| size <= values.len())
            .map(|size| WindowSizeSummary {
                overlapping: summarize_windows(values, size, cfg.overlap_step, cfg.use_sample_std),
                non_overlapping: summarize_windows(values, size, size, cfg.use_sample_std),
            })
            .collect()
    }

    /// Window summaries for every instrument, in identifier order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finestra::summarize",
            skip(self, corpus),
            fields(instruments = corpus.len())
        )
    )]
    #[must_use]
    pub fn summarize(&self, corpus: &Corpus) -> Vec<InstrumentSummary> {
        corpus
            .iter()
            .map(|(id, series)| {
                let values = series.values();
                let windows = self.summarize_values(&values);

                #[cfg(feature = "tracing")]
                {
                    if windows.len() < self.cfg.summary.window_sizes.len() {
                        tracing::debug!(
                            instrument = %id,
                            points = values.len(),
                            "window sizes longer than the series were skipped"
                        );
                    }
                }

                InstrumentSummary {
                    instrument: id.clone(),
                    display_name: self.display_name(id),
                    points: values.len(),
                    windows,
                }
            })
            .collect()
    }
}
