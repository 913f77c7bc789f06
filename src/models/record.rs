use serde::{Deserialize, Serialize};

/// A dated observation for one quality indicator.
///
/// Records come from two sources: structured input supplied by the caller,
/// and lines derived from extracted document text. The date stays a string
/// as read from the source; the period filter is where parsing happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    /// Record date as written in the source (`YYYY-MM-DD`).
    pub date: String,
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub payload: serde_json::Value,
}
