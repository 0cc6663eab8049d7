//! Unit vector representation for sentences
//!
//! Builds sparse, L2-normalized term-count vectors for cosine similarity
//! between sentences.

use rustc_hash::FxHashMap;

/// A sparse unit vector representation of a sentence
#[derive(Debug, Clone, Default)]
pub struct UnitVector {
    /// Non-zero dimensions: term id -> weight
    pub dimensions: FxHashMap<u32, f64>,
    /// L2 norm of the vector before normalization
    pub norm: f64,
}

impl UnitVector {
    /// Create from a map of dimensions
    pub fn from_dimensions(mut dimensions: FxHashMap<u32, f64>) -> Self {
        let norm = Self::compute_norm(&dimensions);
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Count each term id once per occurrence
    pub fn from_terms(terms: &[u32]) -> Self {
        let mut dimensions: FxHashMap<u32, f64> = FxHashMap::default();
        for &term in terms {
            *dimensions.entry(term).or_insert(0.0) += 1.0;
        }
        Self::from_dimensions(dimensions)
    }

    /// Compute L2 norm
    fn compute_norm(dimensions: &FxHashMap<u32, f64>) -> f64 {
        dimensions.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Compute cosine similarity with another vector
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        // Both vectors are normalized, so cosine is the dot product
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .dimensions
            .iter()
            .filter_map(|(key, value)| large.dimensions.get(key).map(|o| value * o))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let v1 = UnitVector::from_terms(&[1, 2, 2]);
        let v2 = UnitVector::from_terms(&[2, 1, 2]);

        let sim = v1.cosine_similarity(&v2);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1 = UnitVector::from_terms(&[1]);
        let v2 = UnitVector::from_terms(&[2]);

        assert!(v1.cosine_similarity(&v2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vector() {
        let v = UnitVector::from_terms(&[]);
        assert!(v.dimensions.is_empty());
        assert_eq!(v.norm, 0.0);
        assert_eq!(v.cosine_similarity(&UnitVector::from_terms(&[1])), 0.0);
    }

    #[test]
    fn test_unit_normalization() {
        let mut dims = FxHashMap::default();
        dims.insert(0, 3.0);
        dims.insert(1, 4.0);

        let v = UnitVector::from_dimensions(dims);

        assert!((v.norm - 5.0).abs() < 1e-12);
        let actual_norm: f64 = v.dimensions.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((actual_norm - 1.0).abs() < 1e-9);
    }
}
