use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::period::PeriodWindow;
use super::subject::MaskedIdentity;

/// Classification outcome for one quality indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Bad,
    NotApplicable,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::NotApplicable => "not_applicable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "bad" => Some(Self::Bad),
            "not_applicable" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    /// Rank for comparisons: not-applicable < bad < good < excellent.
    pub fn rank(&self) -> u8 {
        match self {
            Self::NotApplicable => 0,
            Self::Bad => 1,
            Self::Good => 2,
            Self::Excellent => 3,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Graded result for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub indicator: String,
    pub grade: Grade,
    pub reason: String,
}

/// A mandatory keyword that appears nowhere in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyError {
    pub keyword: String,
    pub message: String,
}

impl ConsistencyError {
    pub fn missing_keyword(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            message: format!("required keyword not found in any document: {keyword}"),
        }
    }
}

impl std::fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Final, read-only aggregate of one evaluation run, handed across the
/// boundary to the report-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub identity: MaskedIdentity,
    pub window: PeriodWindow,
    pub indicators: BTreeMap<String, IndicatorResult>,
    pub consistency_errors: Vec<ConsistencyError>,
}

/// Rendering failed in the external backend.
#[derive(Debug, Clone, Error)]
#[error("report rendering failed: {0}")]
pub struct RenderError(pub String);

/// Contract of the external report-rendering collaborator.
///
/// The pipeline knows nothing of the output format or layout; it hands over
/// a finished [`ReportData`] and receives the rendered file's path.
pub trait ReportRenderer {
    fn render(&self, report: &ReportData) -> Result<PathBuf, RenderError>;
}
