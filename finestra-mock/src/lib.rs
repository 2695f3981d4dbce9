//! Deterministic CSV fixtures for finestra tests and demos.
//!
//! Each fixture symbol renders in a different export layout (vendor, broker,
//! euro, terminal) so a single directory exercises every normalization path.
//! Prices follow a fixed drift-plus-cycle path; `MSFT` and `TSLA` skip some
//! trading days so the aligned date set is a strict subset of every series.

use std::path::{Path, PathBuf};

use finestra_core::FinestraError;

mod fixtures;

pub use fixtures::layout::Layout;

/// Symbols with fixture data.
pub const SYMBOLS: [&str; 4] = ["AAPL", "MSFT", "SAP", "TSLA"];

/// Default number of trading days rendered per symbol.
pub const DEFAULT_ROWS: usize = 260;

/// Generator of raw CSV sources for the fixture symbols.
#[derive(Debug, Clone, Copy)]
pub struct MockSources {
    rows: usize,
}

impl Default for MockSources {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSources {
    /// Fixtures spanning [`DEFAULT_ROWS`] trading days.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: DEFAULT_ROWS }
    }

    /// Fixtures spanning `rows` trading days (before per-symbol gaps).
    #[must_use]
    pub const fn with_rows(rows: usize) -> Self {
        Self { rows }
    }

    /// Raw CSV text for `symbol`, or `None` for an unknown symbol.
    #[must_use]
    pub fn raw(&self, symbol: &str) -> Option<String> {
        let path = fixtures::history::by_symbol(symbol)?;
        let days = fixtures::history::trading_days(self.rows);
        let rows = fixtures::history::closes(path, &days);
        Some(fixtures::layout::render(
            fixtures::layout::for_symbol(symbol),
            &rows,
        ))
    }

    /// Closing values for `symbol` in date order, as the normalizer should
    /// read them back.
    #[must_use]
    pub fn expected_closes(&self, symbol: &str) -> Option<Vec<f64>> {
        let path = fixtures::history::by_symbol(symbol)?;
        let days = fixtures::history::trading_days(self.rows);
        Some(
            fixtures::history::closes(path, &days)
                .into_iter()
                .map(|(_, c)| c)
                .collect(),
        )
    }

    /// `(name, raw)` pairs for every fixture symbol, names in lower case.
    #[must_use]
    pub fn sources(&self) -> Vec<(String, String)> {
        SYMBOLS
            .iter()
            .filter_map(|s| Some((s.to_lowercase(), self.raw(s)?)))
            .collect()
    }

    /// Write one `<symbol>.csv` per fixture symbol into `dir`.
    ///
    /// # Errors
    /// Returns `FinestraError::Io` when the directory or a file cannot be
    /// written.
    pub fn write_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, FinestraError> {
        std::fs::create_dir_all(dir)
            .map_err(|e| FinestraError::io(dir.display().to_string(), e.to_string()))?;
        self.sources()
            .into_iter()
            .map(|(name, raw)| {
                let path = dir.join(format!("{name}.csv"));
                std::fs::write(&path, raw)
                    .map_err(|e| FinestraError::io(path.display().to_string(), e.to_string()))?;
                Ok(path)
            })
            .collect()
    }
}
