//! Python bindings
//!
//! Exposes `Summarizer`, `summarize` and `word_count` to Python. Bad
//! arguments, configs and languages raise `ValueError`; serialization
//! failures raise `RuntimeError`.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::errors::SummarizerError;
use crate::pipeline::artifacts::Summary;
use crate::summarizer::Summarizer;
use crate::types::{Strategy, SummarizerConfig};

fn to_py_err(err: SummarizerError) -> PyErr {
    match err {
        SummarizerError::InvalidArgument(_)
        | SummarizerError::UnsupportedStrategy(_)
        | SummarizerError::InvalidConfig(_)
        | SummarizerError::UnsupportedLanguage(_)
        | SummarizerError::InvalidSpec(_) => PyValueError::new_err(err.to_string()),
        SummarizerError::Json(_) => PyRuntimeError::new_err(err.to_string()),
    }
}

fn summary_to_dict<'py>(py: Python<'py>, summary: &Summary) -> PyResult<Bound<'py, PyDict>> {
    let sentences = PyList::empty_bound(py);
    for selected in &summary.sentences {
        let item = PyDict::new_bound(py);
        item.set_item("text", &selected.sentence.text)?;
        item.set_item("index", selected.sentence.index)?;
        item.set_item("start", selected.sentence.start)?;
        item.set_item("end", selected.sentence.end)?;
        item.set_item("score", selected.score)?;
        item.set_item("rank", selected.rank)?;
        sentences.append(item)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item("text", &summary.text)?;
    dict.set_item("sentences", sentences)?;
    dict.set_item("strategy", summary.strategy.as_str())?;
    dict.set_item("total_sentences", summary.total_sentences)?;
    dict.set_item("eligible_sentences", summary.eligible_sentences)?;
    dict.set_item("input_words", summary.input_words)?;
    dict.set_item("summary_words", summary.summary_words)?;
    dict.set_item("iterations", summary.iterations)?;
    dict.set_item("converged", summary.converged)?;
    Ok(dict)
}

/// Extractive summarizer.
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    /// Create a summarizer for `language`, optionally extending its stopwords.
    #[new]
    #[pyo3(signature = (language="en", stopwords=None))]
    fn new(language: &str, stopwords: Option<Vec<String>>) -> PyResult<Self> {
        let config = SummarizerConfig {
            language: language.to_string(),
            stopwords: stopwords.unwrap_or_default(),
            ..SummarizerConfig::default()
        };
        let inner = Summarizer::with_config(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Summarize `text` and return the summary string.
    #[pyo3(signature = (text, ratio=0.3, min_sentence_length=20, strategy="frequency"))]
    fn summarize(
        &self,
        py: Python<'_>,
        text: &str,
        ratio: f64,
        min_sentence_length: usize,
        strategy: &str,
    ) -> PyResult<String> {
        let strategy: Strategy = strategy.parse().map_err(to_py_err)?;
        py.allow_threads(|| {
            self.inner
                .summarize(text, ratio, min_sentence_length, strategy)
        })
        .map_err(to_py_err)
    }

    /// Summarize `text` and return a dict with the selected sentences and
    /// word counts.
    #[pyo3(signature = (text, ratio=0.3, min_sentence_length=20, strategy="frequency"))]
    fn summarize_with_info<'py>(
        &self,
        py: Python<'py>,
        text: &str,
        ratio: f64,
        min_sentence_length: usize,
        strategy: &str,
    ) -> PyResult<Bound<'py, PyDict>> {
        let strategy: Strategy = strategy.parse().map_err(to_py_err)?;
        let summary = py
            .allow_threads(|| {
                self.inner
                    .summarize_with_info(text, ratio, min_sentence_length, strategy)
            })
            .map_err(to_py_err)?;
        summary_to_dict(py, &summary)
    }

    /// Same as `summarize_with_info`, serialized as a JSON string.
    #[pyo3(signature = (text, ratio=0.3, min_sentence_length=20, strategy="frequency"))]
    fn summarize_json(
        &self,
        py: Python<'_>,
        text: &str,
        ratio: f64,
        min_sentence_length: usize,
        strategy: &str,
    ) -> PyResult<String> {
        let strategy: Strategy = strategy.parse().map_err(to_py_err)?;
        let summary = py
            .allow_threads(|| {
                self.inner
                    .summarize_with_info(text, ratio, min_sentence_length, strategy)
            })
            .map_err(to_py_err)?;
        serde_json::to_string(&summary).map_err(|e| to_py_err(e.into()))
    }

    fn __repr__(&self) -> String {
        format!("Summarizer(language='{}')", self.inner.resources().language())
    }
}

/// Summarize `text` with a one-off English summarizer.
#[pyfunction]
#[pyo3(signature = (text, ratio=0.3, min_sentence_length=20, strategy="frequency"))]
fn summarize(
    py: Python<'_>,
    text: &str,
    ratio: f64,
    min_sentence_length: usize,
    strategy: &str,
) -> PyResult<String> {
    let strategy: Strategy = strategy.parse().map_err(to_py_err)?;
    py.allow_threads(|| Summarizer::new().summarize(text, ratio, min_sentence_length, strategy))
        .map_err(to_py_err)
}

/// Number of whitespace-separated words in `text`.
#[pyfunction]
fn word_count(text: &str) -> usize {
    crate::nlp::word_count(text)
}

/// Register classes and functions on the extension module.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySummarizer>()?;
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_function(wrap_pyfunction!(word_count, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
