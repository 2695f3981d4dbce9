use finestra::Finestra;
use finestra_core::window_count;
use proptest::prelude::*;

proptest! {
    #[test]
    fn window_counts_match_decomposition(
        values in proptest::collection::vec(-100.0f64..100.0, 0..150),
        sizes in proptest::collection::vec(1usize..40, 1..4),
        step in 1usize..10,
    ) {
        let f = Finestra::builder().window_sizes(&sizes).overlap_step(step).build().unwrap();
        let out = f.summarize_values(&values);
        let kept: Vec<usize> = sizes.iter().copied().filter(|&s| s <= values.len()).collect();
        prop_assert_eq!(out.len(), kept.len());
        for (summary, size) in out.iter().zip(kept) {
            prop_assert_eq!(summary.overlapping.num_windows, window_count(values.len(), size, step));
            prop_assert_eq!(summary.non_overlapping.num_windows, values.len() / size);
            prop_assert!(summary.overlapping.range_of_means.is_defined());
        }
    }
}
