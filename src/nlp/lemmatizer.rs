//! English lemmatization
//!
//! Maps inflected word forms onto one term: an irregular-form table first,
//! then the Porter2 (Snowball English) stemmer. Input is expected to be
//! lowercase. Terms are stems, so "caused" and "causes" both become "caus".

use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashMap;

/// Irregular forms the stemmer cannot relate to their base form
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("goes", "go"), ("went", "go"),
    ("gone", "go"), ("children", "child"), ("men", "man"), ("women", "woman"),
    ("people", "person"), ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"),
    ("geese", "goose"), ("better", "good"), ("best", "good"), ("worse", "bad"),
    ("worst", "bad"), ("ran", "run"), ("made", "make"), ("said", "say"), ("took", "take"),
    ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"), ("knew", "know"),
    ("known", "know"), ("got", "get"), ("gotten", "get"), ("gave", "give"),
    ("given", "give"), ("found", "find"), ("thought", "think"), ("told", "tell"),
    ("became", "become"), ("left", "leave"), ("felt", "feel"), ("brought", "bring"),
    ("began", "begin"), ("begun", "begin"), ("kept", "keep"), ("held", "hold"),
    ("wrote", "write"), ("written", "write"), ("stood", "stand"), ("heard", "hear"),
    ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("sat", "sit"), ("spoke", "speak"),
    ("spoken", "speak"), ("led", "lead"), ("grew", "grow"), ("grown", "grow"),
    ("lost", "lose"), ("fell", "fall"), ("fallen", "fall"), ("sent", "send"),
    ("built", "build"), ("understood", "understand"), ("drew", "draw"), ("drawn", "draw"),
    ("broke", "break"), ("broken", "break"), ("spent", "spend"), ("rose", "rise"),
    ("risen", "rise"), ("drove", "drive"), ("driven", "drive"), ("bought", "buy"),
    ("wore", "wear"), ("worn", "wear"), ("chose", "choose"), ("chosen", "choose"),
    ("ate", "eat"), ("eaten", "eat"), ("flew", "fly"), ("flown", "fly"), ("sang", "sing"),
    ("sung", "sing"), ("swam", "swim"), ("taught", "teach"), ("caught", "catch"),
    ("fought", "fight"), ("sought", "seek"), ("sold", "sell"), ("won", "win"),
    ("analyses", "analysis"), ("crises", "crisis"), ("theses", "thesis"),
    ("criteria", "criterion"), ("phenomena", "phenomenon"), ("data", "data"),
    ("series", "series"), ("species", "species"), ("news", "news"),
    ("lives", "life"), ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"),
    ("wolves", "wolf"), ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"),
    ("biases", "bias"), ("atlases", "atlas"), ("canvases", "canvas"),
];

/// English lemmatizer
#[derive(Clone)]
pub struct Lemmatizer {
    irregular: FxHashMap<&'static str, &'static str>,
    stemmer: Arc<Stemmer>,
}

impl std::fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("irregular", &self.irregular.len())
            .field("stemmer", &"porter2")
            .finish()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer {
    /// Create the English lemmatizer
    pub fn english() -> Self {
        Self {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
            stemmer: Arc::new(Stemmer::create(Algorithm::English)),
        }
    }

    /// Reduce a lowercase word to its term
    ///
    /// Irregular forms are replaced by their base form before stemming, so
    /// "mice" and "mouse" share a term.
    pub fn lemmatize(&self, word: &str) -> String {
        let base = self.irregular.get(word).copied().unwrap_or(word);
        self.stemmer.stem(base).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::english().lemmatize(word)
    }

    fn same_term(words: &[&str]) {
        let lemmatizer = Lemmatizer::english();
        let first = lemmatizer.lemmatize(words[0]);
        for word in &words[1..] {
            assert_eq!(lemmatizer.lemmatize(word), first, "{} vs {word}", words[0]);
        }
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemma("penguins"), "penguin");
        assert_eq!(lemma("narwhals"), "narwhal");
        same_term(&["study", "studies"]);
        same_term(&["class", "classes"]);
        same_term(&["box", "boxes"]);
        same_term(&["church", "churches"]);
    }

    #[test]
    fn test_inflections_share_a_term() {
        same_term(&["analyzed", "analyzes", "analyze"]);
        same_term(&["caused", "causes", "cause"]);
        same_term(&["focused", "focuses", "focus"]);
        same_term(&["bias", "biases"]);
        same_term(&["atlas", "atlases"]);
        same_term(&["running", "runs", "run"]);
        same_term(&["stopped", "stop"]);
        same_term(&["hoping", "hope"]);
        same_term(&["creating", "created", "creates"]);
    }

    #[test]
    fn test_irregular_forms() {
        same_term(&["children", "child"]);
        same_term(&["mice", "mouse"]);
        same_term(&["went", "go"]);
        same_term(&["wolves", "wolf"]);
        same_term(&["ran", "run"]);
    }

    #[test]
    fn test_unrelated_words_stay_apart() {
        let lemmatizer = Lemmatizer::english();
        assert_ne!(lemmatizer.lemmatize("indeed"), lemmatizer.lemmatize("index"));
        assert_ne!(lemmatizer.lemmatize("walrus"), lemmatizer.lemmatize("walk"));
    }

    #[test]
    fn test_numbers_unchanged() {
        assert_eq!(lemma("2024"), "2024");
    }

    #[test]
    fn test_lemmatize_is_stable() {
        let lemmatizer = Lemmatizer::english();
        for word in ["penguins", "causes", "biases", "children"] {
            let once = lemmatizer.lemmatize(word);
            assert_eq!(lemmatizer.lemmatize(word), once);
        }
    }
}
