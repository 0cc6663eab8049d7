//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched: every strategy is a concrete
//! [`Pipeline`](super::runner::Pipeline) type.

use crate::nlp::{is_punctuation, LanguageResources};
use crate::pipeline::artifacts::{SentenceScores, TermStream};
use crate::types::SummarizerConfig;

// ============================================================================
// TermNormalizer: raw token → term (stage 1)
// ============================================================================

/// Maps a raw word token to a normalized term.
///
/// # Contract
///
/// - Returns `None` for stopwords and pure punctuation; these never become
///   terms but stay in the sentence text.
/// - The result is lowercase.
/// - Deterministic for a given token and resource set.
pub trait TermNormalizer {
    fn normalize(&self, token: &str, resources: &LanguageResources) -> Option<String>;
}

/// Lowercased surface form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceNormalizer;

impl TermNormalizer for SurfaceNormalizer {
    #[inline]
    fn normalize(&self, token: &str, resources: &LanguageResources) -> Option<String> {
        content_word(token, resources)
    }
}

/// Lowercased dictionary base form.
///
/// The stopword check runs on the surface form, so "was" is dropped even
/// though its lemma "be" might not be listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LemmaNormalizer;

impl TermNormalizer for LemmaNormalizer {
    fn normalize(&self, token: &str, resources: &LanguageResources) -> Option<String> {
        let lower = content_word(token, resources)?;
        Some(resources.lemmatizer().lemmatize(&lower))
    }
}

fn content_word(token: &str, resources: &LanguageResources) -> Option<String> {
    if is_punctuation(token) {
        return None;
    }
    let lower = token.to_lowercase();
    if resources.stopwords().is_stopword(&lower) {
        return None;
    }
    Some(lower)
}

// ============================================================================
// SentenceScorer: terms → one score per eligible sentence (stage 2)
// ============================================================================

/// Produces a relevance score for every eligible sentence.
///
/// # Contract
///
/// - **Input**: a [`TermStream`] with at least one eligible sentence.
/// - **Output**: exactly `terms.num_sentences()` non-negative scores, in
///   eligible-sentence order.
pub trait SentenceScorer {
    fn score(&self, terms: &TermStream, cfg: &SummarizerConfig) -> SentenceScores;
}
