//! Property tests for graph construction: connectivity, symmetry, positivity.

use lookahead_core::Dataset;
use lookahead_graph::{GraphBuilder, WeightFunction};
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    (3usize..25, 1usize..4).prop_flat_map(|(n, d)| {
        prop::collection::vec(prop::collection::vec(-50.0f64..50.0, d), n)
            .prop_map(|rows| Dataset::from_rows(rows).unwrap())
    })
}

fn arb_weight() -> impl Strategy<Value = WeightFunction> {
    prop_oneof![
        (0.1f64..10.0).prop_map(|b| WeightFunction::gaussian(b).unwrap()),
        Just(WeightFunction::InverseDistance),
    ]
}

proptest! {
    #[test]
    fn built_graph_is_always_connected(data in arb_dataset(), k in 1usize..3, mutual in any::<bool>(), weight in arb_weight()) {
        let graph = GraphBuilder::new(k)
            .with_mutual(mutual)
            .with_weight(weight)
            .build(&data)
            .unwrap();
        prop_assert!(graph.is_connected());
        prop_assert_eq!(graph.len(), data.len());
    }

    #[test]
    fn weights_are_symmetric_positive_and_bounded(data in arb_dataset(), k in 1usize..3) {
        let graph = GraphBuilder::new(k).build(&data).unwrap();
        for i in 0..graph.len() {
            for &(j, w) in graph.neighbours(i) {
                prop_assert!(w > 0.0 && w <= 1.0);
                prop_assert_eq!(graph.weight(j, i), w);
                prop_assert!(w <= graph.max_weight(i));
            }
        }
    }
}
