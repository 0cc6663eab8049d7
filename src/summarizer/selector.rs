//! Top-N sentence selection for summarization
//!
//! Picks the highest-scoring sentences and returns them in document order.

use crate::pipeline::artifacts::SelectedSentence;
use crate::types::Sentence;

/// Guards `floor` against products like `100 * 0.57 = 56.99999999999999`.
const FLOOR_EPSILON: f64 = 1e-9;

/// Number of sentences to keep out of `eligible`
///
/// `max(1, floor(eligible * ratio))`, capped at `eligible`; zero when there
/// is nothing to choose from.
pub fn target_count(eligible: usize, ratio: f64) -> usize {
    if eligible == 0 {
        return 0;
    }
    let raw = (eligible as f64 * ratio + FLOOR_EPSILON).floor();
    let n = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    n.clamp(1, eligible)
}

/// Ratio-driven sentence selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceSelector {
    ratio: f64,
}

impl SentenceSelector {
    /// Create a selector keeping `ratio` of the eligible sentences
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Select the top sentences by score
    ///
    /// `sentences` and `scores` are parallel and in document order. Equal
    /// scores keep document order, so the earlier sentence wins a tie. The
    /// result is re-sorted by document position; `rank` is the 1-based
    /// position in the score ordering.
    pub fn select(&self, sentences: &[&Sentence], scores: &[f64]) -> Vec<SelectedSentence> {
        let len = sentences.len().min(scores.len());
        let n = target_count(len, self.ratio);

        let mut order: Vec<usize> = (0..len).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
        order.truncate(n);

        let mut picked: Vec<(usize, usize)> = order
            .into_iter()
            .enumerate()
            .map(|(i, position)| (position, i + 1))
            .collect();
        picked.sort_unstable_by_key(|&(position, _)| position);

        picked
            .into_iter()
            .map(|(position, rank)| SelectedSentence {
                sentence: sentences[position].clone(),
                score: scores[position],
                rank,
            })
            .collect()
    }
}
