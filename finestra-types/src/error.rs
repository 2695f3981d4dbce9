use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the finestra workspace.
///
/// Only structural problems are errors. Row-level irregularities (unparseable
/// dates or values) and degenerate statistics are data, not failures: rows are
/// dropped and statistics report `NaN`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FinestraError {
    /// A raw source has no usable header plus data rows.
    #[error("malformed source '{source_name}': {reason}")]
    MalformedSource {
        /// Name of the offending source (file stem or caller-supplied label).
        source_name: String,
        /// Human-readable description of what is missing.
        reason: String,
    },

    /// No sources were supplied to load.
    #[error("empty corpus: no sources supplied")]
    EmptyCorpus,

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Reading a source from disk failed.
    #[error("i/o error at {path}: {msg}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying error message.
        msg: String,
    },

    /// Alignment produced no date shared by every instrument.
    #[error("no common dates across instruments")]
    NoCommonDates,
}

impl FinestraError {
    /// Helper: build a `MalformedSource` error.
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build an `Io` error for a path and message.
    pub fn io(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Re-tag a `MalformedSource` error with the given source name.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_source_name(self, name: impl Into<String>) -> Self {
        match self {
            Self::MalformedSource { reason, .. } => Self::MalformedSource {
                source_name: name.into(),
                reason,
            },
            other => other,
        }
    }

    /// Returns true for structural input problems raised by the core
    /// (`MalformedSource`, `EmptyCorpus`).
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedSource { .. } | Self::EmptyCorpus)
    }
}
