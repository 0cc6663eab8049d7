//! Frequency-sum sentence scoring

use super::weights::TermWeightTable;
use crate::pipeline::artifacts::{SentenceScores, TermStream};
use crate::pipeline::traits::SentenceScorer;
use crate::types::SummarizerConfig;

/// Scores a sentence by the summed document frequency of its terms
///
/// Every occurrence counts, so a sentence repeating a frequent term scores
/// higher than one mentioning it once.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencySumScorer;

impl SentenceScorer for FrequencySumScorer {
    fn score(&self, terms: &TermStream, _cfg: &SummarizerConfig) -> SentenceScores {
        let table = TermWeightTable::from_terms(terms.document());
        let scores = terms
            .sentences()
            .iter()
            .map(|sentence| table.sentence_score(sentence))
            .collect();
        SentenceScores::direct(scores)
    }
}
