//! Feature vectors used by similarity ranking

use serde::{Deserialize, Serialize};

/// Value Object: Feature Vector
///
/// Fixed-length numeric representation of a skill list. Serialized as a bare
/// JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Wrap raw vector values
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Number of dimensions
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Raw values
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.0
            .iter()
            .map(|v| f64::from(*v) * f64::from(*v))
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity, 1.0 meaning identical direction.
    ///
    /// Returns 0.0 when either vector has zero norm or the dimensions differ.
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        if self.dimensions() != other.dimensions() {
            return 0.0;
        }
        let norm = self.norm() * other.norm();
        if norm == 0.0 {
            return 0.0;
        }
        let dot: f64 = self
            .0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum();
        dot / norm
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}
