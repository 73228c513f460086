use serde::{Deserialize, Serialize};

use crate::errors::DataError;

/// An ordered pool of N points with D numeric features each.
///
/// Stored row-major. Immutable once built; serialized as a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Dataset {
    features: Vec<f64>,
    dim: usize,
    len: usize,
}

impl Dataset {
    /// Build a dataset from rows, rejecting ragged rows and non-finite values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let len = rows.len();
        if len == 0 {
            return Err(DataError::Empty);
        }
        let dim = rows[0].len();
        let mut features = Vec::with_capacity(len * dim);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dim {
                return Err(DataError::RaggedRow {
                    row,
                    expected: dim,
                    actual: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { row, column });
            }
            features.extend(values);
        }
        Ok(Self { features, dim, len })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of features per point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Feature vector of point `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn point(&self, index: usize) -> &[f64] {
        let start = index * self.dim;
        &self.features[start..start + self.dim]
    }

    /// Iterate over all points in order.
    pub fn points(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.len).map(move |i| self.point(i))
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.point(a)
            .iter()
            .zip(self.point(b))
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Dataset {
    type Error = DataError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Dataset> for Vec<Vec<f64>> {
    fn from(data: Dataset) -> Self {
        data.points().map(<[f64]>::to_vec).collect()
    }
}
