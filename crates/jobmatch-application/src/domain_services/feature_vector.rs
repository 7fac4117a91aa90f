//! Deterministic feature vectors
//!
//! A placeholder feature map, not a trained embedding. The same ordered skill
//! list always yields a bit-identical vector.

use jobmatch_domain::constants::{FEATURE_HASH_MODULUS, FEATURE_VECTOR_DIMENSIONS};
use jobmatch_domain::value_objects::FeatureVector;

/// Maps skill lists to fixed-length vectors with values in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVectorGenerator {
    dimensions: usize,
}

impl FeatureVectorGenerator {
    /// Generator producing vectors of `dimensions` values (at least one)
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Vector length
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Fold each skill's code point sum into slot `i mod D`.
    ///
    /// `v[i mod D] = ((v[i mod D] + h) mod 1000) / 1000`
    ///
    /// Slots are computed in `f64` and stored as `f32`; equal input yields
    /// bit-identical `f32` vectors.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn generate(&self, skills: &[String]) -> FeatureVector {
        let mut slots = vec![0.0_f64; self.dimensions];
        for (i, skill) in skills.iter().enumerate() {
            let hash: u64 = skill.chars().map(u64::from).sum();
            let slot = &mut slots[i % self.dimensions];
            *slot = ((*slot + hash as f64) % FEATURE_HASH_MODULUS) / FEATURE_HASH_MODULUS;
        }
        FeatureVector::new(slots.into_iter().map(|v| v as f32).collect())
    }
}

impl Default for FeatureVectorGenerator {
    fn default() -> Self {
        Self::new(FEATURE_VECTOR_DIMENSIONS)
    }
}
