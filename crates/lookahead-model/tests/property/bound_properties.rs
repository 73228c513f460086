//! Property tests for the k-NN model: probabilities in range, bounds sound
//! and monotone in the number of extra positives.

use std::sync::Arc;

use lookahead_core::{Dataset, IProbabilityModel, Observations};
use lookahead_graph::GraphBuilder;
use lookahead_model::KnnModel;
use proptest::prelude::*;

/// Points, labels, and which points start observed.
fn arb_pool() -> impl Strategy<Value = (Dataset, Vec<bool>, Vec<bool>)> {
    (4usize..16).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), n)
                .prop_map(|rows| Dataset::from_rows(rows).unwrap()),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn observed(labels: &[bool], mask: &[bool]) -> Observations {
    let mut obs = Observations::new();
    for (i, (&label, &seen)) in labels.iter().zip(mask).enumerate() {
        if seen {
            obs.observe(i, label).unwrap();
        }
    }
    obs
}

proptest! {
    #[test]
    fn bound_is_monotone_and_dominates(
        (data, labels, mask) in arb_pool(),
        gamma in 0.01f64..5.0,
        prior in 0.01f64..0.99,
    ) {
        let graph = GraphBuilder::new(2).build(&data).unwrap();
        let model = KnnModel::new(Arc::new(graph), gamma, prior).unwrap();
        let obs = observed(&labels, &mask);
        for i in 0..data.len() {
            let p = model.probability(&obs, i).unwrap().value();
            prop_assert!((0.0..=1.0).contains(&p));
            let mut previous = p;
            for n in 0..4 {
                let b = model.probability_bound(&obs, i, n).unwrap().value();
                prop_assert!(b <= 1.0);
                prop_assert!(b >= previous - 1e-12);
                previous = b;
            }
        }
    }

    #[test]
    fn bound_covers_any_single_revelation(
        (data, labels, mask) in arb_pool(),
        extra in 0usize..16,
        label in any::<bool>(),
    ) {
        let graph = GraphBuilder::new(2).build(&data).unwrap();
        let model = KnnModel::new(Arc::new(graph), 0.1, 0.05).unwrap();
        let obs = observed(&labels, &mask);
        let extra = extra % data.len();
        prop_assume!(!obs.contains(extra));
        let mut after = obs.clone();
        after.observe(extra, label).unwrap();
        for i in 0..data.len() {
            let bound = model.probability_upper_bound(&obs, i).unwrap().value();
            let actual = model.probability(&after, i).unwrap().value();
            prop_assert!(actual <= bound + 1e-12);
        }
    }
}
