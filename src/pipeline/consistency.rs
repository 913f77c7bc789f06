//! Cross-document consistency checking.

use crate::models::ConsistencyError;

/// Report each required keyword that appears in no document text.
///
/// Matching is exact, case-sensitive substring containment; output order
/// follows the keyword order.
pub fn cross_check(texts: &[String], required_keywords: &[String]) -> Vec<ConsistencyError> {
    required_keywords
        .iter()
        .filter(|keyword| !texts.iter().any(|text| text.contains(keyword.as_str())))
        .map(|keyword| ConsistencyError::missing_keyword(keyword))
        .collect()
}
