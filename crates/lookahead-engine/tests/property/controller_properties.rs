//! Property tests for the controller: lengths, uniqueness, depth shrinkage,
//! utility monotonicity under the count utility.

use std::collections::HashSet;
use std::sync::Arc;

use lookahead_core::{Dataset, Responses};
use lookahead_engine::ActiveSearch;
use lookahead_graph::GraphBuilder;
use lookahead_model::KnnModel;
use lookahead_selection::{ArgmaxSelector, CountUtility, ExpectedCountUtility, LookaheadSelector};
use proptest::prelude::*;

#[derive(Debug)]
struct Scenario {
    data: Dataset,
    responses: Responses,
    seed: Vec<usize>,
    budget: usize,
    lookahead: usize,
}

fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (5usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 2), n),
            prop::collection::vec(any::<bool>(), n),
            prop::sample::subsequence((0..n).collect::<Vec<_>>(), 1..3),
            1usize..4,
            1usize..4,
        )
            .prop_map(move |(rows, labels, seed, budget, lookahead)| Scenario {
                data: Dataset::from_rows(rows).unwrap(),
                responses: Responses::new(labels),
                budget: budget.min(n - seed.len()),
                seed,
                lookahead,
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn controller_postconditions_hold(s in arb_scenario()) {
        let graph = GraphBuilder::new(2).build(&s.data).unwrap();
        let engine = ActiveSearch::new(
            vec![Box::new(ArgmaxSelector::new()), Box::new(LookaheadSelector::new())],
            Arc::new(KnnModel::new(Arc::new(graph), 0.1, 0.05).unwrap()),
            Box::new(ExpectedCountUtility),
            Box::new(CountUtility),
        )
        .unwrap();
        let outcome = engine
            .run(&s.data, &s.responses, &s.seed, s.budget, s.lookahead, false)
            .unwrap();

        prop_assert_eq!(outcome.chosen.len(), s.budget);
        prop_assert_eq!(outcome.utilities.len(), s.budget);

        let seed: HashSet<usize> = s.seed.iter().copied().collect();
        let mut seen = HashSet::new();
        for &i in &outcome.chosen {
            prop_assert!(i < s.data.len());
            prop_assert!(!seed.contains(&i));
            prop_assert!(seen.insert(i));
        }

        let mut expected_train = s.seed.clone();
        expected_train.extend(&outcome.chosen);
        prop_assert_eq!(&outcome.train_ind, &expected_train);

        for (i, step) in outcome.steps.iter().enumerate() {
            prop_assert!(step.effective_lookahead <= s.budget - i);
            prop_assert!(step.effective_lookahead >= 1);
        }

        let mut previous = seed.iter().filter(|&&i| s.responses.label(i) == Some(true)).count() as f64;
        for &u in &outcome.utilities {
            let increment = u - previous;
            prop_assert!(increment == 0.0 || increment == 1.0);
            previous = u;
        }
    }
}
