//! Shared helpers for reading delimited text into header + rows.

use crate::types::FinestraError;

/// Candidate delimiters in tie-break order.
const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Header and data rows of one delimited source, fields already cleaned.
#[derive(Debug, Clone)]
pub(crate) struct RawTable {
    pub delimiter: char,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Pick the delimiter with the most occurrences in the header line.
///
/// Ties resolve to the earlier candidate, so comma wins over semicolon and
/// semicolon over tab. A header with none of them reads as comma-separated.
#[must_use]
pub fn detect_delimiter(header_line: &str) -> char {
    let mut best = DELIMITERS[0];
    let mut max_hits = 0usize;
    for d in DELIMITERS {
        let hits = header_line.matches(d).count();
        if hits > max_hits {
            max_hits = hits;
            best = d;
        }
    }
    best
}

fn clean_field(field: &str) -> String {
    field
        .trim()
        .trim_start_matches('\u{FEFF}')
        .trim_matches('"')
        .trim()
        .to_string()
}

/// Split one line into cleaned fields.
///
/// Each line is read independently so an unbalanced quote never swallows
/// the following rows.
fn split_line(builder: &csv::ReaderBuilder, line: &str) -> Vec<String> {
    let mut rdr = builder.from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    match rdr.read_record(&mut record) {
        Ok(true) => record.iter().map(clean_field).collect(),
        _ => Vec::new(),
    }
}

/// Read a delimited source into a [`RawTable`].
///
/// Blank lines are ignored. Returns `MalformedSource` (with an empty source
/// name, to be filled in by the caller) when fewer than two non-blank lines
/// remain.
pub(crate) fn read_table(raw: &str) -> Result<RawTable, FinestraError> {
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    match lines.len() {
        0 => return Err(FinestraError::malformed("", "no header line")),
        1 => return Err(FinestraError::malformed("", "header without data rows")),
        _ => {}
    }

    let delimiter = detect_delimiter(lines[0]);
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .quote(b'"')
        .double_quote(false)
        .escape(Some(b'\\'))
        .trim(csv::Trim::All);

    let headers = split_line(&builder, lines[0]);
    let rows = lines[1..]
        .iter()
        .map(|line| split_line(&builder, line))
        .collect();

    Ok(RawTable {
        delimiter,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_prefers_most_frequent_then_comma() {
        assert_eq!(detect_delimiter("Date;Close;Volume"), ';');
        assert_eq!(detect_delimiter("Date\tClose"), '\t');
        assert_eq!(detect_delimiter("Date,Close;Volume"), ',');
        assert_eq!(detect_delimiter("Date;Close\tVolume"), ';');
        assert_eq!(detect_delimiter("Date"), ',');
    }

    #[test]
    fn fields_are_unquoted_trimmed_and_bom_free() {
        let t = read_table("\u{FEFF}\"Date\" , \"Close/Last\"\n\"01/02/2024\",\" $1,200.00 \"\n")
            .unwrap();
        assert_eq!(t.headers, vec!["Date", "Close/Last"]);
        assert_eq!(t.rows, vec![vec!["01/02/2024".to_string(), "$1,200.00".to_string()]]);
    }

    #[test]
    fn blank_lines_do_not_count() {
        let err = read_table("Date,Close\n\n   \n").unwrap_err();
        assert!(matches!(err, FinestraError::MalformedSource { .. }));
        assert!(read_table("").is_err());
    }
}
