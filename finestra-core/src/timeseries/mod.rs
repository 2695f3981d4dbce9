//! Tabular ingestion, alignment and windowing.
//!
//! Modules include:
//! - `normalize`: one long-format source into a date-ordered `Series`
//! - `wide`: one wide table (date + one column per instrument) into a corpus
//! - `corpus`: many named sources into a corpus keyed by instrument
//! - `align`: date intersection and the dense aligned matrix
//! - `coverage`: per-series bounds and their common window
//! - `window`: fixed-size window decomposition
/// Intersection of dates and matrix construction.
pub mod align;
/// Loading of named sources into a corpus.
pub mod corpus;
/// Date bounds per series and their overlap.
pub mod coverage;
/// Header, date and value normalization of long-format sources.
pub mod normalize;
pub(crate) mod util;
/// Fixed-size, fixed-step window decomposition.
pub mod window;
/// Wide-table ingestion.
pub mod wide;
