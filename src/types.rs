//! Core types for rapid_summarize
//!
//! This module defines the fundamental data structures used throughout the library,
//! including string interning, sentences, strategy selection and configuration.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning to reduce memory usage and enable fast comparisons.
///
/// Normalized terms repeat many times across a document; each unique term is
/// stored once and referenced by a `u32` id.
#[derive(Debug, Default, Clone)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Start byte offset in the document
    pub start: usize,
    /// End byte offset in the document (exclusive)
    pub end: usize,
    /// Position of the sentence within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Length of the trimmed text in characters (Unicode scalar values)
    pub fn char_len(&self) -> usize {
        self.text.trim().chars().count()
    }

    /// Whether the sentence passes the minimum-length filter
    pub fn is_eligible(&self, min_sentence_length: usize) -> bool {
        self.char_len() >= min_sentence_length
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// Summarization strategy
///
/// A closed set: every variant maps to one statically composed pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Sum of document-wide surface-word frequencies
    #[default]
    Frequency,
    /// Sum of document-wide lemma frequencies
    #[serde(alias = "lemma_frequency")]
    LemmaFrequency,
    /// TextRank centrality over the sentence-similarity graph
    Graph,
}

impl Strategy {
    /// All strategies, in display order
    pub const ALL: [Strategy; 3] = [
        Strategy::Frequency,
        Strategy::LemmaFrequency,
        Strategy::Graph,
    ];

    /// Canonical user-facing name
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Frequency => "frequency",
            Strategy::LemmaFrequency => "lemma-frequency",
            Strategy::Graph => "graph",
        }
    }

    /// Short human-readable description of how the strategy ranks sentences
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Frequency => {
                "Ranks sentences by the document frequency of their non-stopword words."
            }
            Strategy::LemmaFrequency => {
                "Ranks sentences by the document frequency of their lemmatized words."
            }
            Strategy::Graph => {
                "Ranks sentences by TextRank centrality in a sentence-similarity graph."
            }
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = SummarizerError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "frequency" | "freq" | "nltk" => Ok(Strategy::Frequency),
            "lemma-frequency" | "lemma_frequency" | "lemma" | "spacy" => {
                Ok(Strategy::LemmaFrequency)
            }
            "graph" | "textrank" | "text_rank" | "text-rank" => Ok(Strategy::Graph),
            _ => Err(SummarizerError::UnsupportedStrategy(value.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Similarity
// ============================================================================

/// Edge weighting between two sentences in the graph strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    /// Shared-term count normalized by the log sentence lengths
    #[default]
    Overlap,
    /// Cosine similarity of term-count vectors
    Cosine,
}

impl std::str::FromStr for SimilarityMeasure {
    type Err = SummarizerError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "overlap" | "textrank" => Ok(SimilarityMeasure::Overlap),
            "cosine" => Ok(SimilarityMeasure::Cosine),
            _ => Err(SummarizerError::invalid_argument(format!(
                "unknown similarity measure '{value}' (expected 'overlap' or 'cosine')"
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Which pipeline to run
    pub strategy: Strategy,
    /// Fraction of eligible sentences to keep, in (0, 1]
    pub ratio: f64,
    /// Minimum trimmed sentence length in characters
    pub min_sentence_length: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when delta < threshold)
    pub convergence_threshold: f64,
    /// Edge weighting for the sentence graph
    pub similarity: SimilarityMeasure,
    /// Language code for stopwords and lemmas
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Frequency,
            ratio: 0.3,
            min_sentence_length: 20,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            similarity: SimilarityMeasure::Overlap,
            language: "en".to_string(),
            stopwords: Vec::new(),
        }
    }
}

/// Check that a summary ratio lies in (0, 1]
pub(crate) fn check_ratio(ratio: f64) -> std::result::Result<(), String> {
    if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(format!("ratio must be in (0, 1], got {ratio}"))
    }
}

/// Convert a summary-length percentage (as offered by interactive shells,
/// 10 to 90) into a ratio
pub fn ratio_from_percent(percent: u32) -> Result<f64> {
    if percent == 0 || percent > 100 {
        return Err(SummarizerError::invalid_argument(format!(
            "percent must be in 1..=100, got {percent}"
        )));
    }
    Ok(percent as f64 / 100.0)
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_ratio(self.ratio).map_err(SummarizerError::invalid_config)?;

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: set summary ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set minimum sentence length
    pub fn with_min_sentence_length(mut self, min_sentence_length: usize) -> Self {
        self.min_sentence_length = min_sentence_length;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set similarity measure
    pub fn with_similarity(mut self, similarity: SimilarityMeasure) -> Self {
        self.similarity = similarity;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_pool() {
        let mut pool = StringPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("world");
        let id3 = pool.intern("hello"); // duplicate

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);
        assert_eq!(pool.get(id1), Some("hello"));
        assert_eq!(pool.get(id2), Some("world"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_sentence_char_len_counts_characters() {
        let s = Sentence::new("Café déjà vu.", 0, 15, 0);
        assert_eq!(s.char_len(), 13);
        assert!(s.is_eligible(13));
        assert!(!s.is_eligible(14));
    }

    #[test]
    fn test_strategy_parse_aliases() {
        assert_eq!("frequency".parse::<Strategy>().unwrap(), Strategy::Frequency);
        assert_eq!("NLTK".parse::<Strategy>().unwrap(), Strategy::Frequency);
        assert_eq!(
            "lemma-frequency".parse::<Strategy>().unwrap(),
            Strategy::LemmaFrequency
        );
        assert_eq!("spacy".parse::<Strategy>().unwrap(), Strategy::LemmaFrequency);
        assert_eq!("TextRank".parse::<Strategy>().unwrap(), Strategy::Graph);
        assert_eq!(" graph ".parse::<Strategy>().unwrap(), Strategy::Graph);
    }

    #[test]
    fn test_strategy_parse_unknown_is_error() {
        let err = "lexrank".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SummarizerError::UnsupportedStrategy(ref s) if s == "lexrank"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_strategy_display_roundtrip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        for strategy in Strategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
        let back: Strategy = serde_json::from_str(r#""lemma_frequency""#).unwrap();
        assert_eq!(back, Strategy::LemmaFrequency);
    }

    #[test]
    fn test_config_json_uses_cli_strategy_names() {
        let config: SummarizerConfig =
            serde_json::from_str(r#"{ "strategy": "lemma-frequency", "ratio": 0.5 }"#).unwrap();
        assert_eq!(config.strategy, Strategy::LemmaFrequency);
        assert_eq!(config.ratio, 0.5);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["strategy"], "lemma-frequency");
    }

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        assert!(SummarizerConfig::default().with_damping(1.5).validate().is_err());
        assert!(SummarizerConfig::default().with_ratio(0.0).validate().is_err());
        assert!(SummarizerConfig::default().with_ratio(1.2).validate().is_err());
        assert!(SummarizerConfig::default().with_ratio(f64::NAN).validate().is_err());
        assert!(SummarizerConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default().with_ratio(1.0).validate().is_ok());
    }

    #[test]
    fn test_config_serde_partial_uses_defaults() {
        let json = r#"{ "strategy": "graph", "ratio": 0.5 }"#;
        let cfg: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.strategy, Strategy::Graph);
        assert!((cfg.ratio - 0.5).abs() < 1e-12);
        assert_eq!(cfg.min_sentence_length, 20);
        assert_eq!(cfg.similarity, SimilarityMeasure::Overlap);
    }

    #[test]
    fn test_ratio_from_percent() {
        assert!((ratio_from_percent(30).unwrap() - 0.3).abs() < 1e-12);
        assert!((ratio_from_percent(100).unwrap() - 1.0).abs() < 1e-12);
        assert!(ratio_from_percent(0).is_err());
        assert!(ratio_from_percent(150).is_err());
    }

    #[test]
    fn test_similarity_parse() {
        assert_eq!(
            "cosine".parse::<SimilarityMeasure>().unwrap(),
            SimilarityMeasure::Cosine
        );
        assert!("jaccard".parse::<SimilarityMeasure>().is_err());
    }
}
