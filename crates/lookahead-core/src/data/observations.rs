use std::collections::HashMap;

use crate::errors::{ConfigError, DataError, SearchResult};

use super::Responses;

/// The training set: point indices whose labels are known, in insertion order.
///
/// This is the only view of the labels that probability models and utility
/// functions receive. During lookahead the labels are hypothetical; in the
/// controller they come from the oracle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    order: Vec<usize>,
    labels: HashMap<usize, bool>,
    positives: usize,
}

impl Observations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            labels: HashMap::with_capacity(capacity),
            positives: 0,
        }
    }

    /// Reveal the oracle labels of `train_ind`, validating range and uniqueness.
    pub fn from_responses(responses: &Responses, train_ind: &[usize]) -> SearchResult<Self> {
        let mut obs = Self::with_capacity(train_ind.len());
        for &index in train_ind {
            let label = responses.label(index).ok_or(ConfigError::IndexOutOfRange {
                index,
                len: responses.len(),
            })?;
            if obs.contains(index) {
                return Err(ConfigError::DuplicateTrainingIndex { index }.into());
            }
            obs.observe(index, label)?;
        }
        Ok(obs)
    }

    /// Append an observation. Observing the same point twice is an error.
    pub fn observe(&mut self, index: usize, label: bool) -> Result<(), DataError> {
        if self.labels.contains_key(&index) {
            return Err(DataError::AlreadyObserved { index });
        }
        self.labels.insert(index, label);
        self.order.push(index);
        if label {
            self.positives += 1;
        }
        Ok(())
    }

    /// Remove the most recent observation. Used to unwind a simulated branch.
    pub fn retract(&mut self) -> Option<(usize, bool)> {
        let index = self.order.pop()?;
        let label = self.labels.remove(&index)?;
        if label {
            self.positives -= 1;
        }
        Some((index, label))
    }

    pub fn label_of(&self, index: usize) -> Option<bool> {
        self.labels.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.labels.contains_key(&index)
    }

    /// Observed indices in insertion order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// (index, label) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.order.iter().map(move |&i| (i, self.labels[&i]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of observed points labeled positive.
    pub fn positive_count(&self) -> usize {
        self.positives
    }

    /// Unobserved indices below `pool_size`, ascending.
    pub fn unobserved(&self, pool_size: usize) -> impl Iterator<Item = usize> + '_ {
        (0..pool_size).filter(move |i| !self.labels.contains_key(i))
    }

    /// Number of unobserved indices below `pool_size`.
    pub fn unobserved_count(&self, pool_size: usize) -> usize {
        let observed_in_pool = self.order.iter().filter(|&&i| i < pool_size).count();
        pool_size - observed_in_pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SearchError;

    #[test]
    fn observe_and_retract_track_positives() {
        let mut obs = Observations::new();
        obs.observe(3, true).unwrap();
        obs.observe(1, false).unwrap();
        assert_eq!(obs.positive_count(), 1);
        assert_eq!(obs.indices(), &[3, 1]);

        assert_eq!(obs.retract(), Some((1, false)));
        assert_eq!(obs.retract(), Some((3, true)));
        assert_eq!(obs.positive_count(), 0);
        assert!(obs.retract().is_none());
    }

    #[test]
    fn duplicate_observation_is_rejected() {
        let mut obs = Observations::new();
        obs.observe(2, true).unwrap();
        assert!(matches!(
            obs.observe(2, false),
            Err(DataError::AlreadyObserved { index: 2 })
        ));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs.label_of(2), Some(true));
    }

    #[test]
    fn from_responses_validates_indices() {
        let responses = Responses::from_binary(&[1, 0, 1]);
        assert!(matches!(
            Observations::from_responses(&responses, &[0, 5]),
            Err(SearchError::ConfigError(ConfigError::IndexOutOfRange { index: 5, len: 3 }))
        ));
        assert!(matches!(
            Observations::from_responses(&responses, &[0, 0]),
            Err(SearchError::ConfigError(ConfigError::DuplicateTrainingIndex { index: 0 }))
        ));
        let obs = Observations::from_responses(&responses, &[2, 1]).unwrap();
        assert_eq!(obs.iter().collect::<Vec<_>>(), vec![(2, true), (1, false)]);
    }

    #[test]
    fn unobserved_lists_remaining_pool() {
        let mut obs = Observations::new();
        obs.observe(0, true).unwrap();
        obs.observe(3, false).unwrap();
        assert_eq!(obs.unobserved(5).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(obs.unobserved_count(5), 3);
    }
}
