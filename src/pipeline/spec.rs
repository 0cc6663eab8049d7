//! Summary specification types.
//!
//! A [`SummarySpec`] is the versioned JSON form of a
//! [`SummarizerConfig`]: which strategy to run, how much to keep, graph
//! parameters and strictness settings. Specs are checked by the
//! [`ValidationEngine`] before they turn into a config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "strategy": "graph",
//!   "ratio": 0.3,
//!   "min_sentence_length": 20,
//!   "graph": { "damping": 0.85, "max_iterations": 100, "threshold": 1e-6,
//!              "similarity": "overlap" },
//!   "stopwords": ["lorem"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::errors::{Result, SummarizerError};
use crate::types::{SimilarityMeasure, Strategy, SummarizerConfig};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Strategy name; any alias accepted by [`Strategy`]'s `FromStr`.
    #[serde(default)]
    pub strategy: Option<String>,

    #[serde(default)]
    pub ratio: Option<f64>,

    #[serde(default)]
    pub min_sentence_length: Option<usize>,

    /// Language code for stopwords and lemmas.
    #[serde(default)]
    pub language: Option<String>,

    /// Graph strategy parameters. Ignored (with a warning) otherwise.
    #[serde(default)]
    pub graph: Option<GraphSpec>,

    /// Extra stopwords on top of the built-in list.
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Parameters for the TextRank centrality scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub damping: Option<f64>,

    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Convergence threshold
    #[serde(default)]
    pub threshold: Option<f64>,

    #[serde(default)]
    pub similarity: Option<SimilarityMeasure>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl GraphSpec {
    /// Whether any parameter is set.
    pub fn is_set(&self) -> bool {
        self.damping.is_some()
            || self.max_iterations.is_some()
            || self.threshold.is_some()
            || self.similarity.is_some()
    }
}

impl SummarySpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed strategy, if the field is present and valid.
    pub fn parsed_strategy(&self) -> Option<Strategy> {
        self.strategy.as_deref().and_then(|s| s.parse().ok())
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Validate and convert into a [`SummarizerConfig`].
    ///
    /// Omitted fields keep their defaults. Warnings are logged; any error
    /// fails the conversion with every error message joined.
    pub fn to_config(&self) -> Result<SummarizerConfig> {
        let report = self.validate();

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        if report.has_errors() {
            let messages: Vec<String> = report.errors().map(|e| e.to_string()).collect();
            return Err(SummarizerError::InvalidSpec(messages.join("; ")));
        }

        let mut config = SummarizerConfig::default();
        if let Some(strategy) = self.parsed_strategy() {
            config.strategy = strategy;
        }
        if let Some(ratio) = self.ratio {
            config.ratio = ratio;
        }
        if let Some(min) = self.min_sentence_length {
            config.min_sentence_length = min;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(graph) = &self.graph {
            if let Some(damping) = graph.damping {
                config.damping = damping;
            }
            if let Some(max_iterations) = graph.max_iterations {
                config.max_iterations = max_iterations;
            }
            if let Some(threshold) = graph.threshold {
                config.convergence_threshold = threshold;
            }
            if let Some(similarity) = graph.similarity {
                config.similarity = similarity;
            }
        }
        config.stopwords = self.stopwords.clone();

        config.validate()?;
        Ok(config)
    }
}

impl SummarizerConfig {
    /// Parse, validate and convert a JSON summary spec.
    pub fn from_spec_json(json: &str) -> Result<Self> {
        SummarySpec::from_json(json)?.to_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.strategy.is_none());
        assert!(spec.graph.is_none());
        assert!(!spec.strict);
    }

    #[test]
    fn test_minimal_spec_gives_default_config() {
        let config = SummarizerConfig::from_spec_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn test_full_spec_to_config() {
        let json = r#"{
            "v": 1,
            "strategy": "textrank",
            "ratio": 0.5,
            "min_sentence_length": 10,
            "graph": { "damping": 0.9, "max_iterations": 50, "threshold": 1e-5,
                       "similarity": "cosine" },
            "stopwords": ["lorem"],
            "strict": true
        }"#;
        let config = SummarizerConfig::from_spec_json(json).unwrap();

        assert_eq!(config.strategy, Strategy::Graph);
        assert_eq!(config.ratio, 0.5);
        assert_eq!(config.min_sentence_length, 10);
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.convergence_threshold, 1e-5);
        assert_eq!(config.similarity, SimilarityMeasure::Cosine);
        assert_eq!(config.stopwords, vec!["lorem".to_string()]);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "graph": { "damping": 0.8, "bogus_graph": "xyz" }
        }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.graph.unwrap().unknown_fields.contains_key("bogus_graph"));
    }

    #[test]
    fn test_invalid_spec_reports_all_errors() {
        let json = r#"{ "v": 2, "strategy": "lexrank", "ratio": 0 }"#;
        let err = SummarizerConfig::from_spec_json(json).unwrap_err();

        let SummarizerError::InvalidSpec(message) = err else {
            panic!("expected InvalidSpec, got {err:?}");
        };
        assert!(message.contains("/v"));
        assert!(message.contains("/strategy"));
        assert!(message.contains("/ratio"));
    }

    #[test]
    fn test_malformed_json() {
        let err = SummarySpec::from_json("{ \"v\": ").unwrap_err();
        assert!(matches!(err, SummarizerError::Json(_)));
    }

    #[test]
    fn test_warnings_do_not_fail_conversion() {
        let json = r#"{ "v": 1, "strategy": "frequency", "graph": { "damping": 0.9 } }"#;
        let config = SummarizerConfig::from_spec_json(json).unwrap();
        assert_eq!(config.strategy, Strategy::Frequency);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{"v":1,"strategy":"graph","graph":{"similarity":"cosine"}}"#;
        let spec = SummarySpec::from_json(json).unwrap();
        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["strategy"], "graph");
        assert_eq!(back["graph"]["similarity"], "cosine");
    }
}
