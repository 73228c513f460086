//! Property tests: pruning and parallelism never change the selection.

use std::sync::Arc;

use lookahead_core::{Dataset, ISelector, Observations, Selection};
use lookahead_graph::GraphBuilder;
use lookahead_model::KnnModel;
use lookahead_selection::{ExpectedCountUtility, LookaheadSelector};
use proptest::prelude::*;

fn arb_pool() -> impl Strategy<Value = (Dataset, Vec<bool>, Vec<bool>)> {
    (4usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 2), n)
                .prop_map(|rows| Dataset::from_rows(rows).unwrap()),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::bool::weighted(0.3), n),
        )
    })
}

fn run(selector: LookaheadSelector, data: &Dataset, obs: &Observations, model: &KnnModel, depth: usize) -> Option<Selection> {
    selector
        .select(data, obs, model, &ExpectedCountUtility, depth, false)
        .ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn pruned_and_parallel_match_exhaustive(
        (data, labels, mask) in arb_pool(),
        depth in 1usize..4,
    ) {
        let graph = GraphBuilder::new(2).build(&data).unwrap();
        let model = KnnModel::new(Arc::new(graph), 0.1, 0.05).unwrap();
        let mut obs = Observations::new();
        for (i, (&label, &seen)) in labels.iter().zip(&mask).enumerate() {
            if seen {
                obs.observe(i, label).unwrap();
            }
        }
        prop_assume!(obs.len() < data.len());

        let exhaustive = run(LookaheadSelector::new().with_pruning(false).with_parallel(false), &data, &obs, &model, depth).unwrap();
        for (pruning, parallel) in [(true, false), (false, true), (true, true)] {
            let other = run(LookaheadSelector::new().with_pruning(pruning).with_parallel(parallel), &data, &obs, &model, depth).unwrap();
            prop_assert_eq!(other.index, exhaustive.index);
            prop_assert!((other.expected_utility - exhaustive.expected_utility).abs() < 1e-12);
        }
        prop_assert!(!obs.contains(exhaustive.index));
    }
}
