//! Stopword filtering
//!
//! This module provides stopword filtering backed by the `stop-words` crate,
//! with support for extending or shrinking the built-in list.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from text
///
/// Lookups are case-insensitive: the stored list is lowercase and queries are
/// lowercased before matching.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create the built-in English stopword filter
    pub fn english() -> Self {
        Self {
            stopwords: Self::load(LANGUAGE::English),
        }
    }

    /// Create a stopword filter for the given language code
    ///
    /// Only languages with lemmatization support are accepted; anything else
    /// fails instead of silently falling back to another list.
    pub fn for_language(language: &str) -> Result<Self> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            other => Err(SummarizerError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load(language: LANGUAGE) -> FxHashSet<String> {
        get(language).iter().map(|s| s.to_lowercase()).collect()
    }
}
