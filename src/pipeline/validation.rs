//! Validation engine for summary specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`](super::spec::SummarySpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_summarize::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::{GraphSpec, SummarySpec, SPEC_VERSION};
use crate::nlp::is_supported_language;
use crate::types::{check_ratio, Strategy};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`SpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarySpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"ratio_range"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarySpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(StrategyRule));
        engine.add_rule(Box::new(RatioRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(GraphParamsRule));
        engine.add_rule(Box::new(GraphOptionsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version must be supported ─────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Strategy must name a known strategy ────────────────────────────────

struct StrategyRule;

impl ValidationRule for StrategyRule {
    fn name(&self) -> &str {
        "strategy"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.strategy.as_deref() {
            Some(name) if name.parse::<Strategy>().is_err() => {
                let known: Vec<&str> = Strategy::ALL.iter().map(|s| s.as_str()).collect();
                vec![ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::UnsupportedStrategy,
                        "/strategy",
                        format!("unsupported strategy \"{name}\""),
                    )
                    .with_hint(format!("Use one of: {}", known.join(", "))),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 3. Ratio must lie in (0, 1] ───────────────────────────────────────────

struct RatioRule;

impl ValidationRule for RatioRule {
    fn name(&self) -> &str {
        "ratio_range"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.ratio.map(check_ratio) {
            Some(Err(message)) => vec![ValidationDiagnostic::error(
                SpecError::new(ErrorCode::InvalidValue, "/ratio", message)
                    .with_hint("Use a fraction such as 0.3 for a 30% summary"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Language must have resources ───────────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.language.as_deref() {
            Some(language) if !is_supported_language(language) => {
                vec![ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        "/language",
                        format!("no stopword or lemma resources for language \"{language}\""),
                    )
                    .with_hint("Use \"en\""),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 5. Graph parameters must be in range ──────────────────────────────────

struct GraphParamsRule;

impl GraphParamsRule {
    fn check(graph: &GraphSpec) -> Vec<SpecError> {
        let mut out = Vec::new();

        if let Some(damping) = graph.damping {
            if !(0.0..=1.0).contains(&damping) {
                out.push(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        "/graph/damping",
                        format!("damping must be between 0 and 1, got {damping}"),
                    )
                    .with_hint("0.85 is the usual choice"),
                );
            }
        }

        if graph.max_iterations == Some(0) {
            out.push(SpecError::new(
                ErrorCode::InvalidValue,
                "/graph/max_iterations",
                "max_iterations must be greater than 0",
            ));
        }

        if let Some(threshold) = graph.threshold {
            if !(threshold > 0.0 && threshold.is_finite()) {
                out.push(SpecError::new(
                    ErrorCode::InvalidValue,
                    "/graph/threshold",
                    format!("threshold must be a positive number, got {threshold}"),
                ));
            }
        }

        out
    }
}

impl ValidationRule for GraphParamsRule {
    fn name(&self) -> &str {
        "graph_params"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        spec.graph
            .as_ref()
            .map(Self::check)
            .unwrap_or_default()
            .into_iter()
            .map(ValidationDiagnostic::error)
            .collect()
    }
}

// ─── 6. Graph options only matter for the graph strategy ───────────────────

struct GraphOptionsRule;

impl ValidationRule for GraphOptionsRule {
    fn name(&self) -> &str {
        "graph_options"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let graph_set = spec.graph.as_ref().is_some_and(GraphSpec::is_set);
        // An unparseable strategy is already reported by StrategyRule
        let strategy = match spec.strategy.as_deref() {
            None => Some(Strategy::default()),
            Some(_) => spec.parsed_strategy(),
        };

        match strategy {
            Some(strategy) if graph_set && strategy != Strategy::Graph => {
                vec![ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::IgnoredOption,
                        "/graph",
                        format!("graph options have no effect with the {strategy} strategy"),
                    )
                    .with_hint("Set strategy to \"graph\" or remove the graph section"),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 7. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        if let Some(graph) = &spec.graph {
            out.extend(Self::check_unknowns(
                "/graph",
                &graph.unknown_fields,
                spec.strict,
            ));
        }
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
