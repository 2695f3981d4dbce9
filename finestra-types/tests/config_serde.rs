use finestra_types::{
    CoverageReport, DEFAULT_WINDOW_SIZES, FinestraConfig, InstrumentId, OverlapWindow,
    SeriesCoverage, SummaryConfig, ValueRange, WindowSummary,
};

use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn default_summary_matches_documented_window_sizes() {
    let cfg = SummaryConfig::default();
    assert_eq!(cfg.window_sizes, DEFAULT_WINDOW_SIZES.to_vec());
    assert_eq!(cfg.overlap_step, 1);
    assert!(!cfg.use_sample_std);
}

#[test]
fn config_roundtrip_preserves_display_names() {
    let mut cfg = FinestraConfig::default();
    cfg.display_names.insert("APPLE".into(), "AAPL".into());
    cfg.summary.window_sizes = vec![5, 10];
    cfg.summary.overlap_step = 2;

    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: FinestraConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(de, cfg);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let de: FinestraConfig =
        serde_json::from_str(r#"{"summary":{"overlap_step":3}}"#).expect("deserialize");
    assert_eq!(de.summary.overlap_step, 3);
    assert_eq!(de.summary.window_sizes, DEFAULT_WINDOW_SIZES.to_vec());
    assert!(de.display_names.is_empty());
}

#[test]
fn coverage_report_serializes_dates_as_iso() {
    let report = CoverageReport {
        entries: vec![SeriesCoverage {
            instrument: InstrumentId::from("msft"),
            rows: 2,
            first: Some(d(2024, 1, 2)),
            last: Some(d(2024, 1, 3)),
        }],
        overlap: Some(OverlapWindow {
            start: d(2024, 1, 2),
            end: d(2024, 1, 3),
        }),
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"MSFT\""));
    assert!(json.contains("\"2024-01-02\""));
    let de: CoverageReport = serde_json::from_str(&json).unwrap();
    assert_eq!(de, report);
}

#[test]
fn undefined_ranges_round_trip_as_null() {
    let summary = WindowSummary {
        window_size: 1,
        step: 1,
        num_windows: 3,
        range_of_means: ValueRange { min: 1.0, max: 3.0 },
        range_of_stddevs: ValueRange::UNDEFINED,
        total_peaks: 0,
        total_troughs: 0,
    };
    let json = serde_json::to_string(&summary).expect("serialize summary");
    assert!(json.contains(r#""range_of_stddevs":{"min":null,"max":null}"#));

    let de: WindowSummary = serde_json::from_str(&json).expect("deserialize summary");
    assert_eq!(de.range_of_means, summary.range_of_means);
    assert!(de.range_of_stddevs.min.is_nan());
    assert!(de.range_of_stddevs.max.is_nan());
    assert!(!de.range_of_stddevs.is_defined());
    assert_eq!(de.num_windows, 3);
}
