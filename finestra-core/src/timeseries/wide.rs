use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::series::{Corpus, Observation, Series};
use crate::timeseries::normalize::{normalize_date, normalize_value};
use crate::timeseries::util::read_table;
use crate::types::{FinestraError, InstrumentId};

/// Parse a wide table (one date column followed by one value column per
/// instrument) into a [`Corpus`].
///
/// Column headers become identifiers through
/// [`InstrumentId::from_source_name`]; blank headers are skipped and a
/// repeated identifier keeps its first column. Rows whose date cannot be
/// resolved are dropped for every instrument, while an unparseable cell only
/// drops that instrument's observation.
///
/// ```
/// use finestra_core::{InstrumentId, normalize_wide};
///
/// let c = normalize_wide("Date,aapl,msft\n2024-01-02,1,2\n2024-01-03,,4\n").unwrap();
/// assert_eq!(c[&InstrumentId::from("AAPL")].len(), 1);
/// assert_eq!(c[&InstrumentId::from("MSFT")].values(), vec![2.0, 4.0]);
/// ```
///
/// # Errors
/// `MalformedSource` when the text has no data rows or fewer than two
/// header columns.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "finestra_core::normalize_wide",
        level = "debug",
        skip(raw),
        fields(bytes = raw.len()),
        err
    )
)]
pub fn normalize_wide(raw: &str) -> Result<Corpus, FinestraError> {
    let table = read_table(raw)?;
    if table.headers.len() < 2 {
        return Err(FinestraError::malformed(
            "",
            "wide table needs a date column and at least one value column",
        ));
    }

    let mut columns: BTreeMap<InstrumentId, usize> = BTreeMap::new();
    for (idx, header) in table.headers.iter().enumerate().skip(1) {
        if header.is_empty() {
            continue;
        }
        if let Entry::Vacant(v) = columns.entry(InstrumentId::from_source_name(header)) {
            v.insert(idx);
        }
    }

    let mut buckets: BTreeMap<InstrumentId, Vec<Observation>> =
        columns.keys().map(|id| (id.clone(), Vec::new())).collect();
    for row in &table.rows {
        let Some(date) = row.first().and_then(|c| normalize_date(c)) else {
            continue;
        };
        for (id, &col) in &columns {
            let Some(value) = row.get(col).and_then(|c| normalize_value(c)) else {
                continue;
            };
            if let Some(bucket) = buckets.get_mut(id) {
                bucket.push(Observation::new(date, value));
            }
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(id, obs)| (id, Series::from_observations(obs)))
        .collect())
}
