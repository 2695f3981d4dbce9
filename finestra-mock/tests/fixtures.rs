use finestra_core::{InstrumentId, build_matrix, load_corpus, normalize};
use finestra_mock::{MockSources, SYMBOLS};

#[test]
fn every_layout_normalizes_back_to_the_fixture_closes() {
    let mock = MockSources::with_rows(120);
    for sym in SYMBOLS {
        let raw = mock.raw(sym).unwrap();
        let series = normalize(&raw).unwrap();
        assert_eq!(Some(series.values()), mock.expected_closes(sym), "{sym}");
    }
}

#[test]
fn gaps_shrink_the_aligned_dates() {
    let mock = MockSources::with_rows(100);
    let corpus = load_corpus(mock.sources()).unwrap();
    let m = build_matrix(&corpus);
    let aapl = corpus[&InstrumentId::from("AAPL")].len();
    assert_eq!(aapl, 100);
    assert!(m.rows() < aapl);
    assert!(m.rows() > 80);
    assert_eq!(m.cols(), SYMBOLS.len());
}

#[test]
fn unknown_symbol_has_no_fixture() {
    assert!(MockSources::new().raw("NOPE").is_none());
}

#[test]
fn writes_one_csv_per_symbol() {
    let dir = tempfile::tempdir().unwrap();
    let paths = MockSources::with_rows(10).write_dir(dir.path()).unwrap();
    assert_eq!(paths.len(), SYMBOLS.len());
    assert!(paths.iter().all(|p| p.extension().is_some_and(|e| e == "csv")));
}
