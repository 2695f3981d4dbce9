//! Configuration types shared by the orchestrator and demos.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Window sizes summarized by default when none are configured.
pub const DEFAULT_WINDOW_SIZES: [usize; 3] = [50, 200, 2000];

/// Which window decompositions to summarize for every instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Window sizes to evaluate. Sizes longer than a series are skipped for it.
    pub window_sizes: Vec<usize>,
    /// Step used for the overlapping pass (the non-overlapping pass always
    /// steps by the window size).
    pub overlap_step: usize,
    /// Use the sample (`n - 1`) standard deviation instead of the population one.
    pub use_sample_std: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            window_sizes: DEFAULT_WINDOW_SIZES.to_vec(),
            overlap_step: 1,
            use_sample_std: false,
        }
    }
}

/// Global configuration for the `Finestra` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinestraConfig {
    /// Window summary settings.
    pub summary: SummaryConfig,
    /// Friendly display labels keyed by instrument identifier (e.g.
    /// `"APPLE" -> "AAPL"`). Keys are matched after upper-casing.
    pub display_names: BTreeMap<String, String>,
}
