use serde::{Deserialize, Serialize};

/// The point a strategy chose and the expected utility it predicted for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub expected_utility: f64,
}

impl Selection {
    pub fn new(index: usize, expected_utility: f64) -> Self {
        Self {
            index,
            expected_utility,
        }
    }

    /// Whether `self` beats `other`: higher value wins, equal values go to the
    /// lower index.
    pub fn beats(&self, other: &Selection) -> bool {
        self.expected_utility > other.expected_utility
            || (self.expected_utility == other.expected_utility && self.index < other.index)
    }

    /// The better of two selections under [`Selection::beats`].
    pub fn better(self, other: Selection) -> Selection {
        if other.beats(&self) {
            other
        } else {
            self
        }
    }
}
