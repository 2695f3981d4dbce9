use std::collections::btree_map::Entry;

use crate::series::Corpus;
use crate::timeseries::normalize::normalize;
use crate::types::{FinestraError, InstrumentId};

/// Normalize every named source and key the results by instrument.
///
/// - The identifier is the source name trimmed and upper-cased
///   ([`InstrumentId::from_source_name`]).
/// - A source that normalizes to zero observations is kept with an empty
///   series; alignment then yields no common dates.
/// - When two names fold to the same identifier, the first source wins and
///   later ones are skipped without being parsed.
///
/// # Errors
/// - `EmptyCorpus` when `sources` yields nothing.
/// - `MalformedSource` (tagged with the source name) when any kept source
///   lacks a header line or data rows.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "finestra_core::load_corpus", level = "debug", skip_all, err)
)]
pub fn load_corpus<I, N, R>(sources: I) -> Result<Corpus, FinestraError>
where
    I: IntoIterator<Item = (N, R)>,
    N: AsRef<str>,
    R: AsRef<str>,
{
    let mut corpus = Corpus::new();
    let mut seen_any = false;

    for (name, raw) in sources {
        seen_any = true;
        let name = name.as_ref();
        match corpus.entry(InstrumentId::from_source_name(name)) {
            Entry::Vacant(v) => {
                let series = normalize(raw.as_ref()).map_err(|e| e.with_source_name(name))?;
                v.insert(series);
            }
            Entry::Occupied(_o) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    source = name,
                    instrument = %_o.key(),
                    "duplicate instrument identifier; keeping the first source"
                );
            }
        }
    }

    if !seen_any {
        return Err(FinestraError::EmptyCorpus);
    }
    Ok(corpus)
}
