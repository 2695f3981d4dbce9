use std::fmt::Write;

use chrono::NaiveDate;

/// Export layouts found in the wild, one per fixture symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Comma separated, ISO dates, `Close` and `Adj Close` columns.
    Vendor,
    /// Quoted, newest first, `M/D/YYYY` dates, `$` prices with thousands separators.
    Broker,
    /// Semicolon separated, euro-prefixed prices.
    Euro,
    /// Tab separated, `Trade Date` / `Last` headers.
    Terminal,
}

pub fn for_symbol(s: &str) -> Layout {
    match s {
        "MSFT" => Layout::Broker,
        "SAP" => Layout::Euro,
        "TSLA" => Layout::Terminal,
        _ => Layout::Vendor,
    }
}

fn thousands(v: f64) -> String {
    let fixed = format!("{v:.2}");
    let (int, frac) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let (sign, digits) = int.strip_prefix('-').map_or(("", int), |d| ("-", d));
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac}")
}

pub fn render(layout: Layout, rows: &[(NaiveDate, f64)]) -> String {
    let mut out = String::new();
    match layout {
        Layout::Vendor => {
            out.push_str("Date,Open,High,Low,Close,Adj Close,Volume\n");
            for (d, c) in rows {
                let _ = writeln!(
                    out,
                    "{d},{o:.2},{h:.2},{l:.2},{raw:.2},{c:.2},1000000",
                    o = c - 0.5,
                    h = c + 1.0,
                    l = c - 1.0,
                    raw = c + 0.25,
                );
            }
        }
        Layout::Broker => {
            out.push_str("\"Date\",\"Close/Last\",\"Volume\",\"Open\"\n");
            for (d, c) in rows.iter().rev() {
                let _ = writeln!(
                    out,
                    "\"{}\",\"${}\",\"2500000\",\"${}\"",
                    d.format("%m/%d/%Y"),
                    thousands(*c),
                    thousands(c - 0.75),
                );
            }
        }
        Layout::Euro => {
            out.push_str("Date;Open;Close;Volume\n");
            for (d, c) in rows {
                let _ = writeln!(out, "{d};€ {o:.2};€ {c:.2};400000", o = c + 0.4);
            }
        }
        Layout::Terminal => {
            out.push_str("Trade Date\tLast\tChange\n");
            for (d, c) in rows {
                let _ = writeln!(out, "{}\t{c:.2}\t0.00", d.format("%Y/%m/%d"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::thousands;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(1_234_567.891), "1,234,567.89");
        assert_eq!(thousands(999.5), "999.50");
        assert_eq!(thousands(1_000.0), "1,000.00");
        assert_eq!(thousands(-123.0), "-123.00");
        assert_eq!(thousands(-1_234.5), "-1,234.50");
    }
}
