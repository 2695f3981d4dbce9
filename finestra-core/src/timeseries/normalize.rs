use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::series::{Observation, Series};
use crate::stats::coerce::parse_numeric_text;
use crate::timeseries::util::read_table;
use crate::types::{FinestraError, NormalizeReport};

/// Canonical role of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRole {
    /// Observation date.
    Date,
    /// Closing (or last) price.
    Close,
    /// Anything else; ignored downstream.
    Other,
}

/// Header fragments that mark a close column when contained anywhere.
const CLOSE_CONTAINS: [&str; 4] = ["close/last", "adjusted close", "close price", "closing price"];
/// Header spellings that mark a close column only on an exact match.
const CLOSE_EXACT: [&str; 3] = ["close", "adj close", "last"];

/// Map a raw header onto its canonical role (case-insensitive).
#[must_use]
pub fn header_role(header: &str) -> HeaderRole {
    let s = header.trim().to_lowercase();
    if s.contains("date") {
        HeaderRole::Date
    } else if CLOSE_EXACT.contains(&s.as_str()) || CLOSE_CONTAINS.iter().any(|c| s.contains(c)) {
        HeaderRole::Close
    } else {
        HeaderRole::Other
    }
}

/// Formats tried, in order, once the ISO and `M/D/YYYY` shapes have failed.
const FALLBACK_DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%m-%d-%Y",
];

const FALLBACK_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_iso(v: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = v.split('-').collect();
    match parts.as_slice() {
        [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
            if ![y, m, d].iter().all(|p| all_digits(p)) {
                return None;
            }
            NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
        }
        _ => None,
    }
}

fn parse_month_day_year(v: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = v.split('/').collect();
    match parts.as_slice() {
        [m, d, y] if (1..=2).contains(&m.len()) && (1..=2).contains(&d.len()) && y.len() == 4 => {
            if ![m, d, y].iter().all(|p| all_digits(p)) {
                return None;
            }
            NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
        }
        _ => None,
    }
}

fn parse_fallback(v: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Some(dt.date_naive());
    }
    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(v, f).ok().map(|dt| dt.date()))
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(v, f).ok())
        })
}

/// Normalize a date cell to a calendar date.
///
/// Accepts ISO `YYYY-MM-DD`, US `M/D/YYYY`, and a fixed list of other common
/// spellings (`2024/01/02`, `02-Jan-2024`, `Jan 02, 2024`, RFC 3339, ...).
/// ISO-shaped text naming an impossible date (e.g. `2024-02-30`) is rejected.
///
/// ```
/// use chrono::NaiveDate;
/// use finestra_core::normalize_date;
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(normalize_date("2024-01-02"), Some(d));
/// assert_eq!(normalize_date("1/2/2024"), Some(d));
/// assert_eq!(normalize_date("not a date"), None);
/// ```
#[must_use]
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let v = raw.trim();
    if v.is_empty() {
        return None;
    }
    parse_iso(v)
        .or_else(|| parse_month_day_year(v))
        .or_else(|| parse_fallback(v))
}

/// Normalize a price cell: strip currency symbols, thousands separators and
/// whitespace, then parse. Non-finite results are rejected.
#[must_use]
pub fn normalize_value(raw: &str) -> Option<f64> {
    parse_numeric_text(raw)
}

/// Index of the last column carrying `role`.
///
/// When a source carries both `Close` and `Adj Close`, the later column (the
/// adjusted one in the usual layout) is the one read.
fn column_for(roles: &[HeaderRole], role: HeaderRole) -> Option<usize> {
    roles.iter().rposition(|r| *r == role)
}

/// Parse one raw tabular source into a [`Series`].
///
/// Fails with `MalformedSource` only when the text has fewer than two
/// non-blank lines. Rows lacking a resolvable date or a finite value are
/// dropped silently; the result is sorted by date and keeps the first
/// occurrence of a repeated date.
///
/// ```
/// use finestra_core::normalize;
///
/// let s = normalize("Date;Close/Last\n01/03/2024;$10.50\n01/02/2024;$9.00\n").unwrap();
/// assert_eq!(s.values(), vec![9.0, 10.5]);
/// ```
///
/// # Errors
/// Returns `Err(FinestraError::MalformedSource)` for a source without a header
/// line or without data rows.
pub fn normalize(raw: &str) -> Result<Series, FinestraError> {
    normalize_with_report(raw).map(|(series, _)| series)
}

/// Like [`normalize`], also reporting how many rows were read, kept and
/// dropped.
///
/// # Errors
/// Same as [`normalize`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "finestra_core::normalize",
        level = "debug",
        skip(raw),
        fields(bytes = raw.len()),
        err
    )
)]
pub fn normalize_with_report(raw: &str) -> Result<(Series, NormalizeReport), FinestraError> {
    let table = read_table(raw)?;
    let roles: Vec<HeaderRole> = table.headers.iter().map(|h| header_role(h)).collect();
    let date_col = column_for(&roles, HeaderRole::Date);
    let close_col = column_for(&roles, HeaderRole::Close);

    #[cfg(feature = "tracing")]
    {
        if date_col.is_none() || close_col.is_none() {
            tracing::warn!(
                headers = ?table.headers,
                "no date or close column recognized; every row will be dropped"
            );
        }
    }

    let rows_read = table.rows.len();
    let observations: Vec<Observation> = match (date_col, close_col) {
        (Some(dc), Some(cc)) => table
            .rows
            .iter()
            .filter_map(|row| {
                let date = normalize_date(row.get(dc)?)?;
                let value = normalize_value(row.get(cc)?)?;
                Some(Observation::new(date, value))
            })
            .collect(),
        _ => Vec::new(),
    };
    let parsed = observations.len();
    let (series, duplicates_dropped) = Series::build(observations);

    let report = NormalizeReport {
        rows_read,
        rows_kept: series.len(),
        rows_dropped: rows_read - parsed,
        duplicates_dropped,
        delimiter: table.delimiter,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows_read = report.rows_read,
        rows_kept = report.rows_kept,
        rows_dropped = report.rows_dropped,
        duplicates_dropped = report.duplicates_dropped,
        "normalized source"
    );

    Ok((series, report))
}
