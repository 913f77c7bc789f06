//! Record derivation from extracted text.
//!
//! Administrative care logs carry dated per-event lines
//! (`2025-03-01 투약기록 오전 제공`). Scanning turns those lines into
//! dated records, and an aggregation pass collapses them into per-indicator
//! counts the grading engine can score.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::RuleSet;
use crate::models::DatedRecord;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid regex"));
static BIRTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"생년월일[:\s]*(\d{4}\.\d{2}\.\d{2})").expect("valid regex"));
static ADMISSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"입소일[:\s]*(\d{4}-\d{2}-\d{2})").expect("valid regex"));
static DISCHARGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"퇴소일[:\s]*(\d{4}-\d{2}-\d{2})").expect("valid regex"));

/// Subject fields recovered from document text, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileHints {
    pub birth_date: Option<String>,
    pub admission_date: Option<String>,
    pub discharge_date: Option<String>,
}

/// Pull birth/admission/discharge dates out of document text.
///
/// Labels follow the administrative document layout: birth dates are
/// dot-separated, admission and discharge dates dash-separated.
pub fn extract_profile_hints(text: &str) -> ProfileHints {
    ProfileHints {
        birth_date: first_capture(&BIRTH_RE, text),
        admission_date: first_capture(&ADMISSION_RE, text),
        discharge_date: first_capture(&DISCHARGE_RE, text),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Derive one record per dated occurrence of a rule's pattern.
///
/// A line must carry both the pattern and a date to produce a record;
/// undated mentions are not countable events. The matched line becomes the
/// record's payload.
pub fn derive_records(text: &str, rules: &RuleSet) -> Vec<DatedRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        let Some(date) = DATE_RE.find(line).map(|m| m.as_str().to_string()) else {
            continue;
        };
        for (indicator, rule) in rules {
            let pattern = rule.pattern.as_deref().unwrap_or(indicator);
            if line.contains(pattern) {
                records.push(DatedRecord {
                    date: date.clone(),
                    indicator: indicator.clone(),
                    value: Some(1.0),
                    payload: serde_json::Value::String(line.trim().to_string()),
                });
            }
        }
    }
    records
}

/// Collapse records into one per indicator, in first-seen order.
///
/// The aggregate value is the sum of observed values (`None` only when no
/// record in the group carried one); the aggregate date is the latest in
/// the group. Payloads are dropped.
pub fn aggregate_counts(records: &[DatedRecord]) -> Vec<DatedRecord> {
    let mut aggregated: Vec<DatedRecord> = Vec::new();
    for record in records {
        match aggregated
            .iter_mut()
            .find(|r| r.indicator == record.indicator)
        {
            Some(existing) => {
                existing.value = match (existing.value, record.value) {
                    (Some(a), Some(b)) => Some(a + b),
                    (Some(a), None) => Some(a),
                    (None, v) => v,
                };
                // ISO dates order lexicographically.
                if record.date > existing.date {
                    existing.date = record.date.clone();
                }
            }
            None => aggregated.push(DatedRecord {
                payload: serde_json::Value::Null,
                ..record.clone()
            }),
        }
    }
    aggregated
}
