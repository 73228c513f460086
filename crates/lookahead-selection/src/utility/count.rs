//! Active search utility: the number of positives found.

use lookahead_core::errors::SearchResult;
use lookahead_core::{Dataset, IExpectedUtility, IProbabilityModel, IUtility, Observations};

/// Number of positive labels in the training set.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountUtility;

impl IUtility for CountUtility {
    fn utility(&self, _data: &Dataset, obs: &Observations) -> SearchResult<f64> {
        Ok(obs.positive_count() as f64)
    }
}

/// Expected positive count after one more query: `positives + p(candidate)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedCountUtility;

impl IExpectedUtility for ExpectedCountUtility {
    fn expected_utility(
        &self,
        _data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        candidate: usize,
    ) -> SearchResult<f64> {
        let p = model.probability(obs, candidate)?;
        Ok(obs.positive_count() as f64 + p.value())
    }

    /// Each of the `remaining` later queries adds at most one positive, with
    /// probability no higher than the largest bound over the unobserved pool
    /// after `remaining` extra positives.
    fn future_gain_bound(
        &self,
        data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        remaining: usize,
    ) -> SearchResult<Option<f64>> {
        if remaining == 0 {
            return Ok(Some(0.0));
        }
        let mut max_bound = 0.0f64;
        for x in obs.unobserved(data.len()) {
            let bound = model.probability_bound(obs, x, remaining)?.value();
            max_bound = max_bound.max(bound);
            if max_bound >= 1.0 {
                break;
            }
        }
        Ok(Some(remaining as f64 * max_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookahead_core::Probability;

    struct Constant(f64);
    impl IProbabilityModel for Constant {
        fn probability(&self, _: &Observations, _: usize) -> SearchResult<Probability> {
            Ok(Probability::new(self.0)?)
        }
        fn probability_bound(&self, _: &Observations, _: usize, _: usize) -> SearchResult<Probability> {
            Ok(Probability::new(self.0)?)
        }
        fn name(&self) -> &str {
            "constant"
        }
    }

    fn data(n: usize) -> Dataset {
        Dataset::from_rows((0..n).map(|i| vec![i as f64]).collect()).unwrap()
    }

    #[test]
    fn count_is_number_of_positives() {
        let mut obs = Observations::new();
        obs.observe(0, true).unwrap();
        obs.observe(1, false).unwrap();
        obs.observe(2, true).unwrap();
        assert_eq!(CountUtility.utility(&data(3), &obs).unwrap(), 2.0);
    }

    #[test]
    fn expected_count_adds_probability() {
        let mut obs = Observations::new();
        obs.observe(0, true).unwrap();
        let eu = ExpectedCountUtility
            .expected_utility(&data(3), &obs, &Constant(0.25), 1)
            .unwrap();
        assert_eq!(eu, 1.25);
    }

    #[test]
    fn future_gain_scales_with_remaining_steps() {
        let obs = Observations::new();
        let bound = ExpectedCountUtility
            .future_gain_bound(&data(4), &obs, &Constant(0.5), 3)
            .unwrap();
        assert_eq!(bound, Some(1.5));
        let none_left = ExpectedCountUtility
            .future_gain_bound(&data(4), &obs, &Constant(0.5), 0)
            .unwrap();
        assert_eq!(none_left, Some(0.0));
    }
}
