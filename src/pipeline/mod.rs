//! Summarization pipeline
//!
//! Every strategy runs the same five stages (segment, normalize, score,
//! select, format). Strategies differ only in the [`traits::TermNormalizer`]
//! and [`traits::SentenceScorer`] they plug in. JSON specs describing a run
//! are parsed by [`spec`] and checked by [`validation`].

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use artifacts::{SelectedSentence, SentenceScores, SentenceSet, Summary, TermStream};
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{
    FrequencyPipeline, GraphPipeline, LemmaFrequencyPipeline, Pipeline, PipelineBuilder,
};
pub use spec::SummarySpec;
