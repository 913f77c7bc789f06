//! Evaluation configuration: indicator threshold rules and mandatory
//! keywords.
//!
//! The rule set is pipeline-agnostic data supplied by the embedding
//! application. JSON is the on-disk format; in-memory construction works
//! the same way. [`EvaluationConfig::default`] carries the stock rule set
//! for Korean long-term-care documentation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Threshold rule for one quality indicator.
///
/// Thresholds are inclusive lower bounds, checked best-first; a missing
/// threshold is unreachable and never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excellent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad: Option<f64>,
    #[serde(default)]
    pub excellent_reason: String,
    #[serde(default)]
    pub good_reason: String,
    #[serde(default)]
    pub bad_reason: String,
    /// Text pattern counted when deriving records from document text.
    /// Defaults to the indicator name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Rule set keyed by indicator name.
pub type RuleSet = BTreeMap<String, IndicatorRule>;

/// Full configuration consumed by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub rules: RuleSet,
    /// Keywords that must appear somewhere in the resident's corpus.
    #[serde(default)]
    pub required_keywords: Vec<String>,
    /// Extraction worker pool size. `None` uses the host's available
    /// parallelism.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<usize>,
}

impl EvaluationConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        let mut rules = RuleSet::new();
        rules.insert(
            "투약기록".to_string(),
            IndicatorRule {
                excellent: Some(10.0),
                good: Some(1.0),
                bad: Some(0.0),
                excellent_reason: "투약기록 누락 없음".to_string(),
                good_reason: "투약기록 일부 누락".to_string(),
                bad_reason: "투약기록 없음".to_string(),
                pattern: None,
            },
        );
        rules.insert(
            "프로그램참여".to_string(),
            IndicatorRule {
                excellent: Some(5.0),
                good: Some(1.0),
                bad: Some(0.0),
                excellent_reason: "프로그램 참여 충실".to_string(),
                good_reason: "프로그램 참여 일부 누락".to_string(),
                bad_reason: "프로그램 참여 기록 없음".to_string(),
                pattern: Some("프로그램 참여".to_string()),
            },
        );
        rules.insert(
            "신체변화".to_string(),
            IndicatorRule {
                excellent: Some(1.0),
                good: None,
                bad: Some(0.0),
                excellent_reason: "신체변화 기록 있음".to_string(),
                good_reason: String::new(),
                bad_reason: "신체변화 기록 없음".to_string(),
                pattern: None,
            },
        );
        Self {
            rules,
            required_keywords: vec![
                "프로그램 서명".to_string(),
                "투약 기록".to_string(),
                "신체변화".to_string(),
            ],
            worker_count: None,
        }
    }
}
