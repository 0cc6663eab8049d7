//! Sentence segmentation and word tokenization
//!
//! Sentence boundaries start from the Unicode text segmentation rules
//! (UAX #29) and are then repaired for English abbreviations and for hard
//! line wraps, which UAX #29 treats as paragraph breaks.

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end with a period without ending the sentence
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "e.g", "i.e", "cf",
    "inc", "ltd", "corp", "dept", "univ", "approx", "lt", "capt", "sgt", "gov", "sen", "hon",
    "u.s", "u.k",
];

/// Abbreviations that are also plain words; they only hold the sentence
/// together when a number follows, as in "No. 5" or "Dec. 24"
const ENGLISH_NUMERIC_ABBREVIATIONS: &[&str] = &[
    "no", "nos", "vol", "pp", "fig", "figs", "eq", "ch", "sec", "al", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Characters that may follow terminal punctuation inside the same sentence
const CLOSING_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Sentence and word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lowercase abbreviations without their final period
    abbreviations: FxHashSet<String>,
    /// Same, but only when the next sentence starts with a digit
    numeric_abbreviations: FxHashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Tokenizer {
    /// Create a tokenizer with the built-in English abbreviation lists
    pub fn english() -> Self {
        Self {
            numeric_abbreviations: abbreviation_set(ENGLISH_NUMERIC_ABBREVIATIONS),
            ..Self::with_abbreviations(ENGLISH_ABBREVIATIONS)
        }
    }

    /// Create a tokenizer with a custom abbreviation list
    ///
    /// Entries are matched case-insensitively; a trailing period is optional.
    pub fn with_abbreviations(abbreviations: &[&str]) -> Self {
        Self {
            abbreviations: abbreviation_set(abbreviations),
            numeric_abbreviations: FxHashSet::default(),
        }
    }

    /// Split text into sentences, in document order
    ///
    /// Offsets refer to `text`; sentence text is trimmed and whitespace-only
    /// segments are dropped.
    pub fn segment_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (offset, segment) in text.split_sentence_bound_indices() {
            let trimmed_start = segment.len() - segment.trim_start().len();
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + trimmed_start;
            let end = start + trimmed.len();

            if let Some(last) = spans.last_mut() {
                let previous = &text[last.0..last.1];
                let gap = &text[last.1..start];
                if self.continues(previous, gap, trimmed) {
                    last.1 = end;
                    continue;
                }
            }
            spans.push((start, end));
        }

        spans
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| Sentence::new(&text[start..end], start, end, index))
            .collect()
    }

    /// Split text into raw word tokens
    ///
    /// Whitespace is dropped; punctuation is kept as separate tokens so that
    /// normalization decides what becomes a term.
    pub fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .collect()
    }

    /// Whether the boundary between `previous` and `next` should be removed
    fn continues(&self, previous: &str, gap: &str, next: &str) -> bool {
        // A blank line always separates sentences
        if gap.matches('\n').count() >= 2 {
            return false;
        }

        let body = previous.trim_end_matches(CLOSING_PUNCTUATION);
        let Some(last) = body.chars().last() else {
            return false;
        };

        if !matches!(last, '.' | '!' | '?' | '\u{2026}') {
            // Hard-wrapped line in the middle of a sentence
            return true;
        }

        if last != '.' || body.ends_with("..") {
            return false;
        }

        let Some(first) = next.chars().find(|c| c.is_alphanumeric()) else {
            return false;
        };
        if first.is_lowercase() {
            return true;
        }

        let word = last_word(body).to_lowercase();
        self.abbreviations.contains(&word)
            || (first.is_ascii_digit() && self.numeric_abbreviations.contains(&word))
    }
}

fn abbreviation_set(abbreviations: &[&str]) -> FxHashSet<String> {
    abbreviations
        .iter()
        .map(|a| a.trim_end_matches('.').to_lowercase())
        .filter(|a| !a.is_empty())
        .collect()
}

/// Last whitespace-separated word of `body`, without its final period or
/// leading punctuation
fn last_word(body: &str) -> &str {
    body.strip_suffix('.')
        .unwrap_or(body)
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_segmentation() {
        let tokenizer = Tokenizer::english();
        let sentences =
            tokenizer.segment_sentences("Rust is fast. It is also safe! Is it fun? Yes.");

        assert_eq!(
            texts(&sentences),
            vec!["Rust is fast.", "It is also safe!", "Is it fun?", "Yes."]
        );
    }

    #[test]
    fn test_single_letter_sentences() {
        let tokenizer = Tokenizer::english();
        let sentences = tokenizer.segment_sentences("A. B. C.");
        assert_eq!(texts(&sentences), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tokenizer = Tokenizer::english();
        let sentences =
            tokenizer.segment_sentences("Dr. Smith arrived late. He left early, e.g. At noon.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Dr. Smith arrived late.");
        assert_eq!(sentences[1].text, "He left early, e.g. At noon.");
    }

    #[test]
    fn test_hard_wrapped_lines_are_joined() {
        let tokenizer = Tokenizer::english();
        let text = "The borrow checker rejects\nthis program at compile time.\n\nHeading\n\nNext paragraph.";
        let sentences = tokenizer.segment_sentences(text);

        assert_eq!(
            texts(&sentences),
            vec![
                "The borrow checker rejects\nthis program at compile time.",
                "Heading",
                "Next paragraph."
            ]
        );
    }

    #[test]
    fn test_trailing_text_without_punctuation() {
        let tokenizer = Tokenizer::english();
        let sentences = tokenizer.segment_sentences("First one. And a trailing fragment");
        assert_eq!(
            texts(&sentences),
            vec!["First one.", "And a trailing fragment"]
        );
    }

    #[test]
    fn test_offsets_and_indices() {
        let tokenizer = Tokenizer::english();
        let text = "  Alpha beta.   Gamma delta.  ";
        let sentences = tokenizer.segment_sentences(text);

        assert_eq!(sentences.len(), 2);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
        assert!(sentences[0].end <= sentences[1].start);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let tokenizer = Tokenizer::english();
        assert!(tokenizer.segment_sentences("").is_empty());
        assert!(tokenizer.segment_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_words_keeps_punctuation() {
        let tokenizer = Tokenizer::english();
        let tokens = tokenizer.tokenize_words("Hello, world! It's fine.");
        assert_eq!(tokens, vec!["Hello", ",", "world", "!", "It's", "fine", "."]);
    }

    #[test]
    fn test_plain_word_before_period_ends_sentence() {
        let tokenizer = Tokenizer::english();
        let sentences =
            tokenizer.segment_sentences("The answer was no. Everyone left the room quietly.");
        assert_eq!(
            texts(&sentences),
            vec!["The answer was no.", "Everyone left the room quietly."]
        );

        let sentences = tokenizer.segment_sentences("It snowed in Dec. The lake froze.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_numeric_abbreviations_need_a_number() {
        let tokenizer = Tokenizer::english();
        let sentences =
            tokenizer.segment_sentences("See No. 5 in the list. It opened on Dec. 24 at noon.");
        assert_eq!(
            texts(&sentences),
            vec!["See No. 5 in the list.", "It opened on Dec. 24 at noon."]
        );
    }

    #[test]
    fn test_custom_abbreviations() {
        let tokenizer = Tokenizer::with_abbreviations(&["Approx."]);
        let sentences = tokenizer.segment_sentences("It weighs approx. Ten kilos. Done.");
        assert_eq!(sentences.len(), 2);
    }
}
