//! Finestra-specific errors, configuration primitives, and report envelopes.
#![warn(missing_docs)]

mod config;
mod error;
mod instrument;
mod reports;

pub use config::{DEFAULT_WINDOW_SIZES, FinestraConfig, SummaryConfig};
pub use error::FinestraError;
pub use instrument::InstrumentId;
pub use reports::{
    CoverageReport, InstrumentSummary, MatrixRecap, NormalizeReport, OverlapWindow,
    SeriesCoverage, ValueRange, WindowSizeSummary, WindowSummary,
};
