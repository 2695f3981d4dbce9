//! Instrument identifiers shared across crates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Case-normalized identifier of a priced instrument.
///
/// Identifiers are trimmed and upper-cased on construction so that `aapl`,
/// ` AAPL ` and `Aapl` all resolve to the same key. Ordering is lexicographic
/// on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Derive an identifier from a source name (e.g. a file stem).
    #[must_use]
    pub fn from_source_name(name: &str) -> Self {
        Self(name.trim().to_uppercase())
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self::from_source_name(s)
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self::from_source_name(&s)
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
