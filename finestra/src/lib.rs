//! Finestra aligns daily price series exported in heterogeneous CSV layouts
//! and summarizes them window by window.
//!
//! Overview
//! - Loads a directory (or in-memory set) of CSV sources, one per instrument,
//!   normalizing delimiters, header spellings, date formats and currency
//!   formatting through `finestra_core`.
//! - Aligns the corpus on the dates every instrument shares, yielding a dense
//!   N×M matrix.
//! - Summarizes each instrument over configurable window sizes, both with an
//!   overlapping step and as a disjoint tiling.
//!
//! Key behaviors
//! - Row-level irregularities never fail a load; unreadable rows are dropped.
//! - An empty intersection is reported as `FinestraError::NoCommonDates` here,
//!   while `finestra_core::build_matrix` simply returns zero rows.
//! - Display labels are presentation only and never change identifiers.
//!
//! Example
//! ```rust,no_run
//! use finestra::Finestra;
//!
//! let finestra = Finestra::builder()
//!     .window_sizes(&[50, 200])
//!     .overlap_step(5)
//!     .display_name("apple", "AAPL")
//!     .build()?;
//!
//! let corpus = finestra.load_dir("data/")?;
//! let matrix = finestra.align(&corpus)?;
//! let recap = finestra.recap(&matrix)?;
//! println!("{} → {}: {} points", recap.start, recap.end, recap.points);
//!
//! for summary in finestra.summarize(&corpus) {
//!     println!("{}: {} window sizes", summary.display_name, summary.windows.len());
//! }
//! # Ok::<(), finestra::FinestraError>(())
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;

pub use core::{Finestra, FinestraBuilder};

// Re-export core types for convenience
pub use finestra_core::{
    AlignedMatrix, Corpus, CoverageReport, FinestraConfig, FinestraError, InstrumentId,
    InstrumentSummary, MatrixRecap, NormalizeReport, Observation, OverlapWindow, Series,
    SeriesCoverage, SummaryConfig, ValueRange, WindowSizeSummary, WindowSummary,
};
