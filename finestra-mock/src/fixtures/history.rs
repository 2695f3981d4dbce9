use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Shape of one synthetic price path.
#[derive(Debug, Clone, Copy)]
pub struct PricePath {
    pub base: f64,
    pub drift: f64,
    pub amplitude: f64,
    pub period: f64,
    /// Every `gap_every`-th trading day is missing (0 = no gaps).
    pub gap_every: usize,
}

pub fn by_symbol(s: &str) -> Option<PricePath> {
    match s {
        "AAPL" => Some(PricePath {
            base: 140.0,
            drift: 0.12,
            amplitude: 6.0,
            period: 9.0,
            gap_every: 0,
        }),
        "MSFT" => Some(PricePath {
            base: 240.0,
            drift: 0.20,
            amplitude: 9.5,
            period: 13.0,
            gap_every: 23,
        }),
        "SAP" => Some(PricePath {
            base: 1_050.0,
            drift: -0.35,
            amplitude: 25.0,
            period: 7.0,
            gap_every: 0,
        }),
        "TSLA" => Some(PricePath {
            base: 300.0,
            drift: 0.05,
            amplitude: 30.0,
            period: 5.0,
            gap_every: 17,
        }),
        _ => None,
    }
}

pub fn first_trading_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap_or_default()
}

/// Weekdays starting at [`first_trading_day`].
pub fn trading_days(count: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(count);
    let mut day = first_trading_day();
    while out.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(day);
        }
        day = day + Days::new(1);
    }
    out
}

/// Dated closes for `path` over `days`, with the path's gaps removed.
#[allow(clippy::cast_precision_loss)]
pub fn closes(path: PricePath, days: &[NaiveDate]) -> Vec<(NaiveDate, f64)> {
    days.iter()
        .enumerate()
        .filter(|(i, _)| path.gap_every == 0 || (i + 1) % path.gap_every != 0)
        .map(|(i, d)| {
            let t = i as f64;
            let px = path.amplitude.mul_add(
                (t * std::f64::consts::TAU / path.period).sin(),
                path.drift.mul_add(t, path.base),
            );
            (*d, (px * 100.0).round() / 100.0)
        })
        .collect()
}
