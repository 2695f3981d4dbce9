use chrono::NaiveDate;
use finestra::{Finestra, FinestraError, InstrumentId};
use finestra_mock::{MockSources, SYMBOLS};

fn finestra() -> Finestra {
    Finestra::builder()
        .window_sizes(&[5, 20, 5_000])
        .overlap_step(1)
        .display_name("aapl", "Apple")
        .build()
        .unwrap()
}

#[test]
fn load_align_recap_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    MockSources::with_rows(60).write_dir(dir.path()).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let f = finestra();
    let corpus = f.load_dir(dir.path()).unwrap();
    let ids: Vec<&str> = corpus.keys().map(InstrumentId::as_str).collect();
    assert_eq!(ids, SYMBOLS.to_vec());

    let matrix = f.align(&corpus).unwrap();
    let recap = f.recap(&matrix).unwrap();
    assert_eq!(recap.instruments, SYMBOLS.len());
    assert_eq!(recap.points, matrix.rows());
    assert_eq!(recap.start, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    assert!(recap.end > recap.start);
    assert_eq!(recap.display_names[0], "Apple");
    assert_eq!(recap.display_names[1], "MSFT");
}

#[test]
fn csv_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("spy.CSV"), "Date,Close\n2024-01-02,1\n").unwrap();
    let corpus = finestra().load_dir(dir.path()).unwrap();
    assert!(corpus.contains_key(&InstrumentId::from("SPY")));
}

#[test]
fn directory_without_csv_is_an_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readme.md"), "# nothing").unwrap();
    assert_eq!(
        finestra().load_dir(dir.path()).unwrap_err(),
        FinestraError::EmptyCorpus
    );
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = finestra().load_dir(dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, FinestraError::Io { .. }));
}

#[test]
fn malformed_file_is_named_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("good.csv"), "Date,Close\n2024-01-02,1\n").unwrap();
    std::fs::write(dir.path().join("broken.csv"), "Date,Close\n").unwrap();
    match finestra().load_dir(dir.path()).unwrap_err() {
        FinestraError::MalformedSource { source_name, .. } => assert_eq!(source_name, "broken"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn disjoint_sources_have_no_common_dates() {
    let f = finestra();
    let corpus = f
        .load_sources([
            ("a", "Date,Close\n2024-01-02,1\n"),
            ("b", "Date,Close\n2024-02-02,1\n"),
        ])
        .unwrap();
    assert_eq!(f.align(&corpus).unwrap_err(), FinestraError::NoCommonDates);
    let report = f.coverage(&corpus);
    assert_eq!(report.overlap, None);
    assert!(!report.all_empty());
}

#[test]
fn summaries_skip_window_sizes_longer_than_the_series() {
    let f = finestra();
    let corpus = f.load_sources(MockSources::with_rows(40).sources()).unwrap();
    let summaries = f.summarize(&corpus);
    assert_eq!(summaries.len(), SYMBOLS.len());

    let apple = &summaries[0];
    assert_eq!(apple.display_name, "Apple");
    assert_eq!(apple.points, 40);
    assert_eq!(apple.windows.len(), 2);

    let five = &apple.windows[0];
    assert_eq!(five.overlapping.window_size, 5);
    assert_eq!(five.overlapping.step, 1);
    assert_eq!(five.overlapping.num_windows, 36);
    assert_eq!(five.non_overlapping.step, 5);
    assert_eq!(five.non_overlapping.num_windows, 8);
    assert!(five.overlapping.range_of_means.is_defined());
    assert!(five.overlapping.range_of_means.min <= five.overlapping.range_of_means.max);
}

#[test]
fn summary_serializes_for_reporting() {
    let f = finestra();
    let corpus = f.load_sources(MockSources::with_rows(25).sources()).unwrap();
    let json = serde_json::to_value(f.summarize(&corpus)).unwrap();
    assert_eq!(json[0]["instrument"], "AAPL");
    assert_eq!(json[0]["windows"][1]["non_overlapping"]["num_windows"], 1);
}
