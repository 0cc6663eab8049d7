//! Pipeline runner: stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed pair of stages: a
//! [`TermNormalizer`] and a [`SentenceScorer`]. Segmentation, selection and
//! formatting are shared by every strategy. Calling [`Pipeline::run`]
//! executes the stages in order, threading artifacts between them and
//! notifying a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its stage types, so the compiler monomorphizes
//! each strategy into a unique concrete type. The built-in stages are
//! zero-sized and add no bytes to the pipeline.
//!
//! # Factory methods
//!
//! Use [`Pipeline::frequency()`], [`Pipeline::lemma_frequency()`] and
//! [`Pipeline::graph()`] to build the pipelines behind each
//! [`Strategy`](crate::types::Strategy).

use crate::nlp::{word_count, LanguageResources};
use crate::pipeline::artifacts::{SentenceSet, Summary, TermStream};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FORMAT,
    STAGE_NORMALIZE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::traits::{LemmaNormalizer, SentenceScorer, SurfaceNormalizer, TermNormalizer};
use crate::scoring::{CentralityScorer, FrequencySumScorer};
use crate::summarizer::selector::SentenceSelector;
use crate::types::SummarizerConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Built-in impls |
/// |-------|-------|----------------|
/// | `N`   | [`TermNormalizer`] | [`SurfaceNormalizer`], [`LemmaNormalizer`] |
/// | `S`   | [`SentenceScorer`] | [`FrequencySumScorer`], [`CentralityScorer`] |
#[derive(Debug, Clone, Default)]
pub struct Pipeline<N, S> {
    pub normalizer: N,
    pub scorer: S,
}

/// Surface-word frequency pipeline.
pub type FrequencyPipeline = Pipeline<SurfaceNormalizer, FrequencySumScorer>;

/// Lemma frequency pipeline.
pub type LemmaFrequencyPipeline = Pipeline<LemmaNormalizer, FrequencySumScorer>;

/// TextRank sentence-graph pipeline.
pub type GraphPipeline = Pipeline<LemmaNormalizer, CentralityScorer>;

impl FrequencyPipeline {
    /// Lowercased surface words scored by frequency sum.
    pub fn frequency() -> Self {
        Pipeline {
            normalizer: SurfaceNormalizer,
            scorer: FrequencySumScorer,
        }
    }
}

impl LemmaFrequencyPipeline {
    /// Lemmas scored by frequency sum.
    pub fn lemma_frequency() -> Self {
        Pipeline {
            normalizer: LemmaNormalizer,
            scorer: FrequencySumScorer,
        }
    }
}

impl GraphPipeline {
    /// Lemmas scored by centrality in the sentence-similarity graph.
    pub fn graph() -> Self {
        Pipeline {
            normalizer: LemmaNormalizer,
            scorer: CentralityScorer,
        }
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<N, S> Pipeline<N, S>
where
    N: TermNormalizer,
    S: SentenceScorer,
{
    /// Execute the pipeline on an already-trimmed document.
    ///
    /// Stages run in order:
    /// 1. Segment sentences and apply the minimum-length filter
    /// 2. Normalize tokens into terms
    /// 3. Score eligible sentences
    /// 4. Select the top sentences
    /// 5. Format the summary
    ///
    /// When no sentence is eligible the run stops after segmentation and
    /// returns an empty summary. `cfg` is assumed to be validated.
    pub fn run(
        &self,
        text: &str,
        resources: &LanguageResources,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        // Stage 0: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = resources.tokenizer().segment_sentences(text);
        let set = SentenceSet::new(sentences, cfg.min_sentence_length);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(set.num_eligible())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&set);

        let input_words = word_count(text);
        if !set.has_eligible() {
            return Summary {
                total_sentences: set.num_sentences(),
                input_words,
                ..Summary::empty(cfg.strategy)
            };
        }

        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let terms = self.normalize(&set, resources);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(terms.num_sentences())
            .terms(terms.num_terms())
            .build();
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_terms(&terms);

        // Stage 2: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scores = self.scorer.score(&terms, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(scores.iterations)
            .converged(scores.converged)
            .residual(scores.delta)
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&scores);

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let eligible: Vec<_> = set.eligible().collect();
        let selected = SentenceSelector::new(cfg.ratio).select(&eligible, &scores.scores);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(selected.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selected);

        // Stage 4: Format
        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let text = selected
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let summary = Summary {
            summary_words: word_count(&text),
            text,
            sentences: selected,
            strategy: cfg.strategy,
            total_sentences: set.num_sentences(),
            eligible_sentences: set.num_eligible(),
            input_words,
            iterations: scores.iterations,
            converged: scores.converged,
        };
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_FORMAT, &report);

        summary
    }

    /// Turn every sentence into terms; only eligible sentences get a
    /// per-sentence sequence, but all of them feed the document sequence.
    fn normalize(&self, set: &SentenceSet, resources: &LanguageResources) -> TermStream {
        let mut terms = TermStream::new();
        for (position, sentence) in set.all().iter().enumerate() {
            let eligible = set.is_eligible_at(position);
            let mut ids = Vec::new();
            for token in resources.tokenizer().tokenize_words(&sentence.text) {
                if let Some(term) = self.normalizer.normalize(token, resources) {
                    let id = terms.push_document_term(&term);
                    if eligible {
                        ids.push(id);
                    }
                }
            }
            if eligible {
                terms.push_sentence(ids);
            }
        }
        terms
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the frequency pipeline and allows overriding individual
/// stages.
///
/// ```
/// # use rapid_summarize::pipeline::runner::PipelineBuilder;
/// # use rapid_summarize::pipeline::traits::LemmaNormalizer;
/// let pipeline = PipelineBuilder::new().normalizer(LemmaNormalizer).build();
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<N = SurfaceNormalizer, S = FrequencySumScorer> {
    normalizer: N,
    scorer: S,
}

impl PipelineBuilder {
    /// Start building from the frequency pipeline stages.
    pub fn new() -> Self {
        PipelineBuilder {
            normalizer: SurfaceNormalizer,
            scorer: FrequencySumScorer,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S> PipelineBuilder<N, S> {
    /// Override the term normalizer stage.
    pub fn normalizer<T: TermNormalizer>(self, normalizer: T) -> PipelineBuilder<T, S> {
        PipelineBuilder {
            normalizer,
            scorer: self.scorer,
        }
    }

    /// Override the sentence scorer stage.
    pub fn scorer<T: SentenceScorer>(self, scorer: T) -> PipelineBuilder<N, T> {
        PipelineBuilder {
            normalizer: self.normalizer,
            scorer,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<N, S> {
        Pipeline {
            normalizer: self.normalizer,
            scorer: self.scorer,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
