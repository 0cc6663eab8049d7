//! Document-wide term frequency table

/// Term id → number of occurrences across the whole document
///
/// Read-only once built. Ids index directly into the table since the term
/// pool hands them out densely from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermWeightTable {
    counts: Vec<u64>,
}

impl TermWeightTable {
    /// Count every term occurrence in `document`
    pub fn from_terms(document: &[u32]) -> Self {
        let len = document.iter().map(|&id| id as usize + 1).max().unwrap_or(0);
        let mut counts = vec![0u64; len];
        for &id in document {
            counts[id as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count of a term; zero for terms never seen
    pub fn weight(&self, term: u32) -> u64 {
        self.counts.get(term as usize).copied().unwrap_or(0)
    }

    /// Sum of weights over every term occurrence in a sentence
    pub fn sentence_score(&self, terms: &[u32]) -> f64 {
        terms.iter().map(|&t| self.weight(t) as f64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_occurrences() {
        let table = TermWeightTable::from_terms(&[0, 1, 0, 2, 0]);
        assert_eq!(table.weight(0), 3);
        assert_eq!(table.weight(1), 1);
        assert_eq!(table.weight(2), 1);
        assert_eq!(table.weight(9), 0);
    }

    #[test]
    fn test_sentence_score_counts_repeats() {
        let table = TermWeightTable::from_terms(&[0, 1, 0]);
        // 0 appears twice in the sentence, each occurrence adds its weight
        assert_eq!(table.sentence_score(&[0, 0, 1]), 5.0);
        assert_eq!(table.sentence_score(&[]), 0.0);
    }

    #[test]
    fn test_empty_document() {
        let table = TermWeightTable::from_terms(&[]);
        assert_eq!(table, TermWeightTable::default());
        assert_eq!(table.weight(0), 0);
    }
}
