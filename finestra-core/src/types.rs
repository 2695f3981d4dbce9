//! Re-export of shared types from `finestra-types`.
// Consolidated re-exports so downstream crates can depend on `finestra-core` only

pub use finestra_types::{FinestraConfig, FinestraError, InstrumentId, SummaryConfig};
pub use finestra_types::{
    CoverageReport, InstrumentSummary, MatrixRecap, NormalizeReport, OverlapWindow,
    SeriesCoverage, ValueRange, WindowSizeSummary, WindowSummary,
};
