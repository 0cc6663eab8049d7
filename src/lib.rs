//! # rapid_summarize
//!
//! Extractive text summarization with Python bindings.
//!
//! A document is split into sentences, each sentence is scored, and the
//! highest-scoring ones are returned in their original order. Three
//! strategies are available:
//!
//! - **frequency**: sum of document-wide word frequencies
//! - **lemma-frequency**: the same over lemmatized words
//! - **graph**: TextRank centrality in a sentence-similarity graph
//!
//! ```
//! use rapid_summarize::{Strategy, Summarizer};
//!
//! let text = "The penguin chased the walrus. The penguin saw another penguin. \
//!             The zebra grazed.";
//! let summary = Summarizer::new()
//!     .summarize(text, 0.34, 0, Strategy::Frequency)
//!     .unwrap();
//! assert_eq!(summary, "The penguin saw another penguin.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    ratio_from_percent, Sentence, SimilarityMeasure, Strategy, StringPool, SummarizerConfig,
};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer, word_count, LanguageResources};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{artifacts::SelectedSentence, artifacts::Summary, spec::SummarySpec};
pub use summarizer::{selector::SentenceSelector, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
