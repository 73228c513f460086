use serde::{Deserialize, Serialize};

/// Binary labels for every point in the pool. This is the oracle: the
/// controller reveals entries one at a time through [`super::Observations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(Vec<bool>);

impl Responses {
    pub fn new(labels: Vec<bool>) -> Self {
        Self(labels)
    }

    /// Build from 0/1 integers; any non-zero value counts as positive.
    pub fn from_binary(labels: &[u8]) -> Self {
        Self(labels.iter().map(|&l| l != 0).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label of point `index`, or `None` when out of range.
    pub fn label(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    /// Total number of positive points in the pool.
    pub fn positives(&self) -> usize {
        self.0.iter().filter(|&&l| l).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl FromIterator<bool> for Responses {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
