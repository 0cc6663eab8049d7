//! Sentence similarity measures and similarity-graph construction

use super::builder::GraphBuilder;
use super::unit_vector::UnitVector;
use crate::types::SimilarityMeasure;
use rustc_hash::FxHashMap;

/// Term multiset of one sentence, built once per graph
#[derive(Debug, Clone, Default)]
pub struct TermCounts {
    counts: FxHashMap<u32, u32>,
    len: usize,
}

impl TermCounts {
    pub fn from_terms(terms: &[u32]) -> Self {
        let mut counts = FxHashMap::default();
        for &term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }
        Self {
            counts,
            len: terms.len(),
        }
    }

    /// Sum of `min(count_a(w), count_b(w))` over shared terms
    fn shared(&self, other: &TermCounts) -> u32 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(term, &c)| large.counts.get(term).map(|&o| c.min(o)))
            .sum()
    }
}

/// Shared-term similarity normalized by log sentence lengths
///
/// `Σ_w min(c1(w), c2(w)) / (ln|s1| + ln|s2|)`. When the denominator is zero
/// (both sentences have exactly one term) the raw shared count is returned.
pub fn overlap_similarity(a: &TermCounts, b: &TermCounts) -> f64 {
    if a.len == 0 || b.len == 0 {
        return 0.0;
    }
    let shared = a.shared(b);
    if shared == 0 {
        return 0.0;
    }

    let norm = (a.len as f64).ln() + (b.len as f64).ln();
    if norm.abs() < f64::EPSILON {
        shared as f64
    } else {
        shared as f64 / norm
    }
}

/// Build the undirected sentence-similarity graph
///
/// Node `k` stands for `sentences[k]`. Only pairs with positive similarity
/// get an edge.
pub fn build_similarity_graph(sentences: &[Vec<u32>], measure: SimilarityMeasure) -> GraphBuilder {
    match measure {
        SimilarityMeasure::Overlap => {
            let counts: Vec<TermCounts> =
                sentences.iter().map(|s| TermCounts::from_terms(s)).collect();
            connect_pairs(&counts, overlap_similarity)
        }
        SimilarityMeasure::Cosine => {
            let vectors: Vec<UnitVector> =
                sentences.iter().map(|s| UnitVector::from_terms(s)).collect();
            connect_pairs(&vectors, UnitVector::cosine_similarity)
        }
    }
}

fn connect_pairs<T>(items: &[T], similarity: impl Fn(&T, &T) -> f64) -> GraphBuilder {
    let mut builder = GraphBuilder::new(items.len());
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            builder.increment_edge(i as u32, j as u32, similarity(a, b));
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(a: &[u32], b: &[u32]) -> f64 {
        overlap_similarity(&TermCounts::from_terms(a), &TermCounts::from_terms(b))
    }

    #[test]
    fn test_overlap_counts_shared_terms() {
        // shared: 1 (once), 2 (min(2, 1) = 1)
        let expected = 2.0 / ((4f64).ln() + (3f64).ln());
        assert!((overlap(&[1, 2, 2, 3], &[1, 2, 4]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_repeated_terms_use_min_count() {
        let expected = 2.0 / ((3f64).ln() + (2f64).ln());
        assert!((overlap(&[5, 5, 5], &[5, 5]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_single_term_sentences() {
        assert_eq!(overlap(&[7], &[7]), 1.0);
        assert_eq!(overlap(&[7], &[8]), 0.0);
    }

    #[test]
    fn test_overlap_empty_sentence() {
        assert_eq!(overlap(&[], &[1, 2]), 0.0);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = [1, 2, 3, 3];
        let b = [3, 4, 1];
        assert_eq!(overlap(&a, &b), overlap(&b, &a));
    }

    #[test]
    fn test_build_similarity_graph() {
        let sentences = vec![vec![1, 2], vec![2, 3], vec![4]];
        let builder = build_similarity_graph(&sentences, SimilarityMeasure::Overlap);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
        assert_eq!(builder.edge_weight(0, 1), Some(overlap(&[1, 2], &[2, 3])));
        assert!(builder.edge_weight(0, 2).is_none());
    }

    #[test]
    fn test_build_cosine_graph() {
        let sentences = vec![vec![1, 2], vec![2, 3], vec![3, 1]];
        let builder = build_similarity_graph(&sentences, SimilarityMeasure::Cosine);
        assert_eq!(builder.edge_count(), 3);
        assert!((builder.edge_weight(0, 1).unwrap_or(0.0) - 0.5).abs() < 1e-9);
    }
}
