//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::{SelectedSentence, SentenceScores, SentenceSet, TermStream};

// ============================================================================
// Stage names
// ============================================================================

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_FORMAT: &str = "format";

/// All stages, in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_NORMALIZE,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_FORMAT,
];

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics for one completed stage.
///
/// Optional fields are only filled in by the stages they apply to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    duration: Duration,
    sentences: Option<usize>,
    terms: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    pub fn terms(&self) -> Option<usize> {
        self.terms
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Fluent builder for [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn terms(mut self, n: usize) -> Self {
        self.report.terms = Some(n);
        self
    }

    pub fn iterations(mut self, n: usize) -> Self {
        self.report.iterations = Some(n);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, delta: f64) -> Self {
        self.report.residual = Some(delta);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Receives callbacks while a pipeline runs.
///
/// Every method has an empty default, so implementors only override what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &SentenceSet) {}

    fn on_terms(&mut self, _terms: &TermStream) {}

    fn on_scores(&mut self, _scores: &SentenceScores) {}

    fn on_selection(&mut self, _selected: &[SelectedSentence]) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per completed stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in completion order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a named stage, if it ran.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations.
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .iterations(12)
            .converged(true)
            .residual(1e-7)
            .build();

        assert_eq!(report.duration(), Duration::from_millis(3));
        assert_eq!(report.iterations(), Some(12));
        assert_eq!(report.converged(), Some(true));
        assert!(report.sentences().is_none());
    }

    #[test]
    fn test_timing_observer_collects_reports() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_SEGMENT);
        obs.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_millis(2)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_millis(5)));

        assert_eq!(obs.reports().len(), 2);
        assert!(obs.report(STAGE_SCORE).is_some());
        assert!(obs.report(STAGE_FORMAT).is_none());
        assert_eq!(obs.total(), Duration::from_millis(7));
    }
}
