//! Natural Language Processing components
//!
//! This module provides tokenization, lemmatization and stopword filtering,
//! bundled as [`LanguageResources`] so they are loaded once and shared. The
//! lemmatizer owns the Porter2 stemmer, so it is built once per load as well.

pub mod lemmatizer;
pub mod stopwords;
pub mod tokenizer;

use crate::errors::{Result, SummarizerError};
use lemmatizer::Lemmatizer;
use stopwords::StopwordFilter;
use tokenizer::Tokenizer;

/// Language-specific resources used by every pipeline stage
///
/// Immutable after construction; share it behind an `Arc` between threads.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    language: String,
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
    tokenizer: Tokenizer,
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageResources {
    /// Built-in English resources
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            stopwords: StopwordFilter::english(),
            lemmatizer: Lemmatizer::english(),
            tokenizer: Tokenizer::english(),
        }
    }

    /// Load resources for a language code
    ///
    /// Fails if the language has no stopword list or lemmatizer.
    pub fn load(language: &str) -> Result<Self> {
        if !is_supported_language(language) {
            return Err(SummarizerError::UnsupportedLanguage(language.to_lowercase()));
        }
        Ok(Self {
            stopwords: StopwordFilter::for_language(language)?,
            ..Self::english()
        })
    }

    /// Extend the stopword list
    pub fn with_extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    /// Normalized language code
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

/// Language codes with stopword and lemma resources
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "english"];

/// Whether [`LanguageResources::load`] accepts a language code
pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language.to_lowercase().as_str())
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether a token carries no letters or digits
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_english() {
        let resources = LanguageResources::load("English").unwrap();
        assert_eq!(resources.language(), "en");
        assert!(resources.stopwords().is_stopword("the"));
        assert_eq!(resources.lemmatizer().lemmatize("penguins"), "penguin");
    }

    #[test]
    fn test_load_unknown_language_fails() {
        let err = LanguageResources::load("xx").unwrap_err();
        assert!(matches!(err, SummarizerError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_supported_languages() {
        assert!(is_supported_language("EN"));
        assert!(!is_supported_language("de"));
    }

    #[test]
    fn test_extra_stopwords() {
        let resources = LanguageResources::english().with_extra_stopwords(&["walrus"]);
        assert!(resources.stopwords().is_stopword("Walrus"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one two\nthree\t four "), 4);
        assert_eq!(word_count("e.g. it's - fine"), 4);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("--"));
        assert!(is_punctuation("\u{201c}"));
        assert!(!is_punctuation("It's"));
        assert!(!is_punctuation("42"));
    }
}
