use finestra_types::{FinestraError, InstrumentId};

#[test]
fn with_source_name_retags_only_malformed() {
    let e = FinestraError::malformed("", "no data rows").with_source_name("aapl.csv");
    assert_eq!(
        e,
        FinestraError::MalformedSource {
            source_name: "aapl.csv".into(),
            reason: "no data rows".into(),
        }
    );
    assert_eq!(
        FinestraError::EmptyCorpus.with_source_name("x"),
        FinestraError::EmptyCorpus
    );
}

#[test]
fn structural_classification() {
    assert!(FinestraError::EmptyCorpus.is_structural());
    assert!(FinestraError::malformed("a", "b").is_structural());
    assert!(!FinestraError::NoCommonDates.is_structural());
    assert!(!FinestraError::io("/tmp", "denied").is_structural());
}

#[test]
fn instrument_ids_are_case_folded_and_trimmed() {
    assert_eq!(InstrumentId::from(" aapl "), InstrumentId::from("AAPL"));
    assert_eq!(InstrumentId::from_source_name("Dell Technologies").as_str(), "DELL TECHNOLOGIES");
    assert!(InstrumentId::from("AMD") < InstrumentId::from("amzn"));
}
