use finestra_core::{
    RawValue, count_peaks, count_troughs, mean, range, stats_per_window, standard_deviation,
    variance,
};

const SAMPLE: [f64; 9] = [4.0, 4.0, 1.0, 5.0, 9.0, 7.0, 2.0, 6.0, 5.0];
const ZIGZAG: [i32; 9] = [1, 3, 2, 5, 4, 6, 5, 7, 6];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn mean_of_empty_is_nan() {
    let empty: [f64; 0] = [];
    assert!(mean(&empty).is_nan());
}

#[test]
fn mean_of_plain_numbers() {
    assert!(close(mean(&[1, 2, 3, 4, 5]), 3.0));
}

#[test]
fn mean_parses_currency_text() {
    assert!(close(mean(&["$4.00", "2", "3.00"]), 3.0));
}

#[test]
fn mean_excludes_non_numeric_entries() {
    let mixed = [
        RawValue::Number(1.0),
        RawValue::from("two"),
        RawValue::Number(3.0),
        RawValue::Missing,
        RawValue::from(4_i64),
    ];
    assert!(close(mean(&mixed), 8.0 / 3.0));
}

#[test]
fn standard_deviation_population_and_sample() {
    assert!((standard_deviation(&SAMPLE, false) - 2.298_684_540_6).abs() < 1e-9);
    assert!((standard_deviation(&SAMPLE, true) - 2.438_123_139_7).abs() < 1e-9);
    let sd = standard_deviation(&SAMPLE, false);
    assert!(close(variance(&SAMPLE, false), sd * sd));
}

#[test]
fn sample_deviation_needs_two_points() {
    assert!(standard_deviation(&[3.0], true).is_nan());
    assert!(close(standard_deviation(&[3.0], false), 0.0));
}

#[test]
fn zigzag_extrema() {
    assert_eq!(count_peaks(&ZIGZAG), 4);
    assert_eq!(count_troughs(&ZIGZAG), 3);
}

#[test]
fn short_series_have_no_extrema() {
    assert_eq!(count_peaks(&[1, 5]), 0);
    assert_eq!(count_troughs(&[5, 1]), 0);
    assert_eq!(count_peaks::<f64>(&[]), 0);
}

#[test]
fn per_window_stats_on_zigzag() {
    let out = stats_per_window(&ZIGZAG, 3, 1, false);
    assert_eq!(out.len(), 7);
    let w = out[2];
    assert_eq!((w.start, w.peak_count, w.trough_count, w.length), (2, 1, 0, 3));
    assert!(close(w.mean, 11.0 / 3.0));
}

#[test]
fn constant_series_single_window() {
    let flat = [7.5_f64; 10];
    let out = stats_per_window(&flat, 10, 10, false);
    assert_eq!(out.len(), 1);
    assert!(out[0].standard_deviation.abs() < 1e-12);
    assert_eq!(out[0].peak_count, 0);
    assert_eq!(out[0].trough_count, 0);
}

#[test]
fn range_of_empty_is_undefined() {
    let r = range::<f64>(&[]);
    assert!(r.min.is_nan());
    assert!(r.max.is_nan());
    assert!(!r.is_defined());
}

#[test]
fn range_skips_non_numeric_entries() {
    let r = range(&["$3", "x", "1", "2"]);
    assert!(close(r.min, 1.0));
    assert!(close(r.max, 3.0));
    let holes = range(&[f64::NAN, 5.0, f64::INFINITY, -2.0]);
    assert!(close(holes.min, -2.0));
    assert!(close(holes.max, 5.0));
}

#[test]
fn variance_of_empty_is_nan_in_both_forms() {
    assert!(variance::<f64>(&[], false).is_nan());
    assert!(variance::<f64>(&[], true).is_nan());
    assert!(standard_deviation::<f64>(&[], false).is_nan());
}
