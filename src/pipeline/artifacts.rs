//! First-class pipeline artifacts.
//!
//! Each type represents a typed intermediate result flowing between pipeline
//! stages. Terms use interned IDs internally; string materialization is
//! deferred to the formatting boundary ([`Summary`]).

use serde::Serialize;

use crate::types::{Sentence, Strategy, StringPool};

// ============================================================================
// SentenceSet: segmentation + eligibility output
// ============================================================================

/// Sentences of one document, split into all and eligible.
///
/// `eligible` holds positions into `all`, in document order.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    all: Vec<Sentence>,
    eligible: Vec<usize>,
}

impl SentenceSet {
    /// Build from segmented sentences, keeping those at least
    /// `min_sentence_length` characters long as eligible.
    pub fn new(all: Vec<Sentence>, min_sentence_length: usize) -> Self {
        let eligible = all
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_eligible(min_sentence_length))
            .map(|(i, _)| i)
            .collect();
        Self { all, eligible }
    }

    /// Every sentence in the document.
    pub fn all(&self) -> &[Sentence] {
        &self.all
    }

    /// Eligible sentences, in document order.
    pub fn eligible(&self) -> impl Iterator<Item = &Sentence> + '_ {
        self.eligible.iter().map(move |&i| &self.all[i])
    }

    /// The `k`-th eligible sentence.
    pub fn eligible_at(&self, k: usize) -> Option<&Sentence> {
        self.eligible.get(k).and_then(|&i| self.all.get(i))
    }

    /// Whether the sentence at `position` in [`all`](Self::all) is eligible.
    pub fn is_eligible_at(&self, position: usize) -> bool {
        self.eligible.binary_search(&position).is_ok()
    }

    pub fn num_sentences(&self) -> usize {
        self.all.len()
    }

    pub fn num_eligible(&self) -> usize {
        self.eligible.len()
    }

    pub fn has_eligible(&self) -> bool {
        !self.eligible.is_empty()
    }
}

// ============================================================================
// TermStream: normalized terms
// ============================================================================

/// Normalized terms for one document.
///
/// `document` is the term sequence of the whole document (every sentence,
/// eligible or not); `sentences[k]` is the term sequence of the `k`-th
/// eligible sentence. All ids resolve through `pool`.
#[derive(Debug, Clone, Default)]
pub struct TermStream {
    pool: StringPool,
    document: Vec<u32>,
    sentences: Vec<Vec<u32>>,
}

impl TermStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directly from term strings (document sequence, per-sentence
    /// sequences). Mostly useful for tests and custom scorers.
    pub fn from_terms(document: &[&str], sentences: &[Vec<&str>]) -> Self {
        let mut stream = Self::new();
        for term in document {
            stream.push_document_term(term);
        }
        for terms in sentences {
            let ids = terms.iter().map(|t| stream.pool.intern(t)).collect();
            stream.sentences.push(ids);
        }
        stream
    }

    /// Intern a term and append it to the document sequence.
    pub fn push_document_term(&mut self, term: &str) -> u32 {
        let id = self.pool.intern(term);
        self.document.push(id);
        id
    }

    /// Append the term sequence of the next eligible sentence.
    pub fn push_sentence(&mut self, ids: Vec<u32>) {
        self.sentences.push(ids);
    }

    pub fn pool(&self) -> &StringPool {
        &self.pool
    }

    pub fn document(&self) -> &[u32] {
        &self.document
    }

    pub fn sentences(&self) -> &[Vec<u32>] {
        &self.sentences
    }

    /// Term string for an id.
    pub fn term(&self, id: u32) -> Option<&str> {
        self.pool.get(id)
    }

    /// Number of distinct terms.
    pub fn num_terms(&self) -> usize {
        self.pool.len()
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }
}

// ============================================================================
// SentenceScores: scorer output
// ============================================================================

/// One score per eligible sentence plus convergence information.
///
/// Frequency scorers always report `converged = true` and zero iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScores {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    pub delta: f64,
    /// Graph had too few sentences or no edges; scores are uniform.
    pub degenerate: bool,
}

impl SentenceScores {
    /// Scores from a closed-form scorer.
    pub fn direct(scores: Vec<f64>) -> Self {
        Self {
            scores,
            iterations: 0,
            converged: true,
            delta: 0.0,
            degenerate: false,
        }
    }

    /// Uniform `1/n` scores for a degenerate graph.
    pub fn uniform(n: usize) -> Self {
        let value = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        Self {
            scores: vec![value; n],
            iterations: 0,
            converged: true,
            delta: 0.0,
            degenerate: true,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// ============================================================================
// Selection and Summary: the public stability boundary
// ============================================================================

/// A sentence chosen for the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    #[serde(flatten)]
    pub sentence: Sentence,
    pub score: f64,
    /// 1-based rank among eligible sentences
    pub rank: usize,
}

/// Public-facing summarization result.
///
/// Everything before this type is internal and may change; this type is the
/// contract exposed to Python and JSON consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces
    pub text: String,
    /// Selected sentences, in document order
    pub sentences: Vec<SelectedSentence>,
    pub strategy: Strategy,
    pub total_sentences: usize,
    pub eligible_sentences: usize,
    pub input_words: usize,
    pub summary_words: usize,
    pub iterations: usize,
    pub converged: bool,
}

impl Summary {
    /// Summary of a document with nothing to select.
    pub fn empty(strategy: Strategy) -> Self {
        Self {
            text: String::new(),
            sentences: Vec::new(),
            strategy,
            total_sentences: 0,
            eligible_sentences: 0,
            input_words: 0,
            summary_words: 0,
            iterations: 0,
            converged: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Fraction of input words kept, or 0 for empty input.
    pub fn compression(&self) -> f64 {
        if self.input_words == 0 {
            0.0
        } else {
            self.summary_words as f64 / self.input_words as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        vec![
            Sentence::new("Short.", 0, 6, 0),
            Sentence::new("This one is long enough to pass.", 7, 39, 1),
            Sentence::new("Tiny.", 40, 45, 2),
            Sentence::new("Another sentence that is long.", 46, 76, 3),
        ]
    }

    #[test]
    fn test_sentence_set_eligibility() {
        let set = SentenceSet::new(sentences(), 10);
        assert_eq!(set.num_sentences(), 4);
        assert_eq!(set.num_eligible(), 2);
        let indices: Vec<usize> = set.eligible().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(set.eligible_at(1).map(|s| s.index), Some(3));
        assert!(set.eligible_at(2).is_none());
        assert!(set.is_eligible_at(3));
        assert!(!set.is_eligible_at(0));
    }

    #[test]
    fn test_sentence_set_zero_minimum_keeps_all() {
        let set = SentenceSet::new(sentences(), 0);
        assert_eq!(set.num_eligible(), 4);
    }

    #[test]
    fn test_term_stream_interns() {
        let stream = TermStream::from_terms(
            &["walrus", "tusk", "walrus"],
            &[vec!["walrus", "tusk"], vec!["walrus"]],
        );
        assert_eq!(stream.num_terms(), 2);
        assert_eq!(stream.document(), &[0, 1, 0]);
        assert_eq!(stream.sentences()[1], vec![0]);
        assert_eq!(stream.term(1), Some("tusk"));
    }

    #[test]
    fn test_uniform_scores() {
        let scores = SentenceScores::uniform(4);
        assert!(scores.degenerate);
        assert!(scores.converged);
        assert!(scores.scores.iter().all(|&s| (s - 0.25).abs() < 1e-12));
        assert!(SentenceScores::uniform(0).is_empty());
    }

    #[test]
    fn test_summary_serializes_flat_sentences() {
        let summary = Summary {
            text: "Tiny.".into(),
            sentences: vec![SelectedSentence {
                sentence: Sentence::new("Tiny.", 40, 45, 2),
                score: 1.5,
                rank: 1,
            }],
            strategy: Strategy::Graph,
            total_sentences: 4,
            eligible_sentences: 4,
            input_words: 12,
            summary_words: 1,
            iterations: 7,
            converged: true,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["strategy"], "graph");
        assert_eq!(json["sentences"][0]["index"], 2);
        assert_eq!(json["sentences"][0]["rank"], 1);
        assert!((summary.compression() - 1.0 / 12.0).abs() < 1e-12);
    }
}
