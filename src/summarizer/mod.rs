//! Extractive summarization facade
//!
//! [`Summarizer`] owns the shared [`LanguageResources`] and a default
//! [`SummarizerConfig`], and dispatches each call to the pipeline behind the
//! requested [`Strategy`].

pub mod selector;

use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::{Result, SummarizerError};
use crate::nlp::LanguageResources;
use crate::pipeline::artifacts::Summary;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::Pipeline;
use crate::types::{check_ratio, Strategy, SummarizerConfig};

pub use crate::nlp::word_count;

/// Extractive summarizer
///
/// Cheap to clone; clones share the same resources.
#[derive(Debug, Clone)]
pub struct Summarizer {
    resources: Arc<LanguageResources>,
    config: SummarizerConfig,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// English resources with the default configuration
    pub fn new() -> Self {
        Self {
            resources: Arc::new(LanguageResources::english()),
            config: SummarizerConfig::default(),
        }
    }

    /// Validate `config` and load the resources for its language
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let resources =
            LanguageResources::load(&config.language)?.with_extra_stopwords(&config.stopwords);
        Ok(Self {
            resources: Arc::new(resources),
            config,
        })
    }

    /// Share already-loaded resources
    ///
    /// `config` is validated as in [`with_config`](Self::with_config), but
    /// `config.language` and `config.stopwords` are not applied; the
    /// resources are used as given.
    pub fn from_resources(
        resources: Arc<LanguageResources>,
        config: SummarizerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { resources, config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn resources(&self) -> &Arc<LanguageResources> {
        &self.resources
    }

    /// Summarize `text`, keeping about `ratio` of its eligible sentences
    ///
    /// Sentences shorter than `min_sentence_length` characters are never
    /// selected. Returns the chosen sentences in document order, joined by
    /// single spaces, or `""` when nothing is eligible.
    pub fn summarize(
        &self,
        text: &str,
        ratio: f64,
        min_sentence_length: usize,
        strategy: Strategy,
    ) -> Result<String> {
        self.summarize_with_info(text, ratio, min_sentence_length, strategy)
            .map(|summary| summary.text)
    }

    /// Like [`summarize`](Self::summarize), returning the full [`Summary`]
    pub fn summarize_with_info(
        &self,
        text: &str,
        ratio: f64,
        min_sentence_length: usize,
        strategy: Strategy,
    ) -> Result<Summary> {
        let config = SummarizerConfig {
            strategy,
            ratio,
            min_sentence_length,
            ..self.config.clone()
        };
        self.execute(text, &config, &mut NoopObserver)
    }

    /// Summarize with this summarizer's own configuration
    pub fn run(&self, text: &str) -> Result<Summary> {
        self.execute(text, &self.config, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting each stage to `observer`
    pub fn summarize_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        self.execute(text, &self.config, observer)
    }

    /// Summarize independent documents in parallel
    ///
    /// Results are in input order.
    pub fn summarize_batch(&self, texts: &[&str]) -> Vec<Result<Summary>> {
        texts.par_iter().map(|text| self.run(text)).collect()
    }

    fn execute(
        &self,
        text: &str,
        config: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Summary::empty(config.strategy));
        }
        check_ratio(config.ratio).map_err(SummarizerError::invalid_argument)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = %config.strategy,
            ratio = config.ratio,
            min_sentence_length = config.min_sentence_length,
            "summarizing"
        );

        let resources = self.resources.as_ref();
        let summary = match config.strategy {
            Strategy::Frequency => Pipeline::frequency().run(text, resources, config, observer),
            Strategy::LemmaFrequency => {
                Pipeline::lemma_frequency().run(text, resources, config, observer)
            }
            Strategy::Graph => Pipeline::graph().run(text, resources, config, observer),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total = summary.total_sentences,
            eligible = summary.eligible_sentences,
            selected = summary.sentences.len(),
            "summary ready"
        );

        Ok(summary)
    }
}
