//! Property tests for the training set bookkeeping.

use std::collections::HashSet;

use lookahead_core::Observations;
use proptest::prelude::*;

proptest! {
    #[test]
    fn positive_count_matches_labels(entries in prop::collection::vec((0usize..50, any::<bool>()), 0..40)) {
        let mut obs = Observations::new();
        let mut seen = HashSet::new();
        let mut expected_positives = 0;
        for (index, label) in entries {
            let accepted = obs.observe(index, label).is_ok();
            prop_assert_eq!(accepted, seen.insert(index));
            if accepted && label {
                expected_positives += 1;
            }
        }
        prop_assert_eq!(obs.positive_count(), expected_positives);
        prop_assert_eq!(obs.len(), seen.len());
    }

    #[test]
    fn retract_undoes_observe(
        base in prop::collection::hash_set(0usize..30, 0..10),
        extra in prop::collection::vec((30usize..60, any::<bool>()), 0..10),
    ) {
        let mut obs = Observations::new();
        for &i in &base {
            obs.observe(i, i % 2 == 0).unwrap();
        }
        let snapshot = obs.clone();

        let mut pushed = 0;
        for (index, label) in extra {
            if obs.observe(index, label).is_ok() {
                pushed += 1;
            }
        }
        for _ in 0..pushed {
            prop_assert!(obs.retract().is_some());
        }
        prop_assert_eq!(obs, snapshot);
    }

    #[test]
    fn unobserved_partitions_pool(
        observed in prop::collection::hash_set(0usize..40, 0..40),
        pool in 1usize..40,
    ) {
        let mut obs = Observations::new();
        for &i in &observed {
            obs.observe(i, true).unwrap();
        }
        let free: Vec<usize> = obs.unobserved(pool).collect();
        prop_assert_eq!(free.len(), obs.unobserved_count(pool));
        prop_assert!(free.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(free.iter().all(|i| !obs.contains(*i)));
    }
}
