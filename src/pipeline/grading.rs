//! Indicator grading.
//!
//! Classifies each record's observed value into a grade via ordered
//! threshold rules. Thresholds are inclusive lower bounds checked
//! best-first, so a tie at a threshold resolves to the higher grade.

use std::collections::BTreeMap;

use crate::config::{IndicatorRule, RuleSet};
use crate::models::{DatedRecord, Grade, IndicatorResult};

/// Reason attached when a record carries no observed value.
pub const REASON_NO_DATA: &str = "no data";
/// Reason attached when a value sits below every reachable threshold.
pub const REASON_BELOW_MINIMUM: &str = "below minimum";
/// Reason attached when the rule set has no entry for the indicator.
pub const REASON_NO_RULE: &str = "no rule defined";

/// Grade every record against the rule set.
///
/// Records sharing an indicator name overwrite earlier results
/// (last-write-wins); callers that want one grade over several records
/// pre-aggregate, e.g. with [`crate::pipeline::scan::aggregate_counts`].
pub fn grade_records(
    records: &[DatedRecord],
    rules: &RuleSet,
) -> BTreeMap<String, IndicatorResult> {
    let mut results = BTreeMap::new();
    for record in records {
        let result = grade_record(record, rules.get(&record.indicator));
        results.insert(record.indicator.clone(), result);
    }
    results
}

fn grade_record(record: &DatedRecord, rule: Option<&IndicatorRule>) -> IndicatorResult {
    let indicator = record.indicator.clone();

    let Some(rule) = rule else {
        return IndicatorResult {
            indicator,
            grade: Grade::NotApplicable,
            reason: REASON_NO_RULE.to_string(),
        };
    };
    let Some(value) = record.value else {
        return IndicatorResult {
            indicator,
            grade: Grade::NotApplicable,
            reason: REASON_NO_DATA.to_string(),
        };
    };

    let (grade, reason) = if rule.excellent.is_some_and(|t| value >= t) {
        (Grade::Excellent, rule.excellent_reason.clone())
    } else if rule.good.is_some_and(|t| value >= t) {
        (Grade::Good, rule.good_reason.clone())
    } else if rule.bad.is_some_and(|t| value >= t) {
        (Grade::Bad, rule.bad_reason.clone())
    } else {
        (Grade::NotApplicable, REASON_BELOW_MINIMUM.to_string())
    };

    IndicatorResult {
        indicator,
        grade,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(excellent: Option<f64>, good: Option<f64>, bad: Option<f64>) -> IndicatorRule {
        IndicatorRule {
            excellent,
            good,
            bad,
            excellent_reason: "excellent reason".to_string(),
            good_reason: "good reason".to_string(),
            bad_reason: "bad reason".to_string(),
            pattern: None,
        }
    }

    fn rules_with(indicator: &str, r: IndicatorRule) -> RuleSet {
        let mut rules = RuleSet::new();
        rules.insert(indicator.to_string(), r);
        rules
    }

    fn record(indicator: &str, value: Option<f64>) -> DatedRecord {
        DatedRecord {
            date: "2025-03-01".to_string(),
            indicator: indicator.to_string(),
            value,
            payload: serde_json::Value::Null,
        }
    }

    #[test]
    fn medication_count_scenario() {
        let rules = rules_with("투약기록", rule(Some(10.0), Some(1.0), Some(0.0)));

        let graded = grade_records(&[record("투약기록", Some(10.0))], &rules);
        assert_eq!(graded["투약기록"].grade, Grade::Excellent);

        let graded = grade_records(&[record("투약기록", Some(0.0))], &rules);
        assert_eq!(graded["투약기록"].grade, Grade::Bad);

        let graded = grade_records(&[record("투약기록", None)], &rules);
        assert_eq!(graded["투약기록"].grade, Grade::NotApplicable);
        assert_eq!(graded["투약기록"].reason, REASON_NO_DATA);
    }

    #[test]
    fn threshold_ties_resolve_upward() {
        let rules = rules_with("i", rule(Some(10.0), Some(5.0), Some(1.0)));

        assert_eq!(
            grade_records(&[record("i", Some(5.0))], &rules)["i"].grade,
            Grade::Good
        );
        assert_eq!(
            grade_records(&[record("i", Some(9.9))], &rules)["i"].grade,
            Grade::Good
        );
        assert_eq!(
            grade_records(&[record("i", Some(1.0))], &rules)["i"].grade,
            Grade::Bad
        );
    }

    #[test]
    fn value_below_all_thresholds_is_not_applicable() {
        let rules = rules_with("i", rule(Some(10.0), Some(5.0), Some(1.0)));
        let graded = grade_records(&[record("i", Some(0.5))], &rules);
        assert_eq!(graded["i"].grade, Grade::NotApplicable);
        assert_eq!(graded["i"].reason, REASON_BELOW_MINIMUM);
    }

    #[test]
    fn missing_rule_wins_even_over_a_present_value() {
        let graded = grade_records(&[record("unknown", Some(100.0))], &RuleSet::new());
        assert_eq!(graded["unknown"].grade, Grade::NotApplicable);
        assert_eq!(graded["unknown"].reason, REASON_NO_RULE);
    }

    #[test]
    fn missing_thresholds_are_unreachable() {
        // Only the excellent tier is defined; everything below it falls
        // through to not-applicable.
        let rules = rules_with("i", rule(Some(10.0), None, None));
        assert_eq!(
            grade_records(&[record("i", Some(10.0))], &rules)["i"].grade,
            Grade::Excellent
        );
        assert_eq!(
            grade_records(&[record("i", Some(9.0))], &rules)["i"].grade,
            Grade::NotApplicable
        );
    }

    #[test]
    fn later_records_overwrite_earlier_results() {
        let rules = rules_with("i", rule(Some(10.0), Some(1.0), Some(0.0)));
        let graded = grade_records(
            &[record("i", Some(10.0)), record("i", Some(0.0))],
            &rules,
        );
        assert_eq!(graded.len(), 1);
        assert_eq!(graded["i"].grade, Grade::Bad);
    }

    #[test]
    fn reasons_come_from_the_matched_tier() {
        let rules = rules_with("i", rule(Some(10.0), Some(1.0), Some(0.0)));
        assert_eq!(
            grade_records(&[record("i", Some(12.0))], &rules)["i"].reason,
            "excellent reason"
        );
        assert_eq!(
            grade_records(&[record("i", Some(3.0))], &rules)["i"].reason,
            "good reason"
        );
        assert_eq!(
            grade_records(&[record("i", Some(0.0))], &rules)["i"].reason,
            "bad reason"
        );
    }

    #[test]
    fn grading_is_monotonic_in_the_observed_value() {
        let rules = rules_with("i", rule(Some(10.0), Some(5.0), Some(1.0)));
        let values = [0.0, 0.5, 1.0, 2.0, 5.0, 7.5, 10.0, 100.0];

        let mut last_rank = 0;
        for value in values {
            let rank = grade_records(&[record("i", Some(value))], &rules)["i"]
                .grade
                .rank();
            assert!(
                rank >= last_rank,
                "grade rank dropped at value {value}: {rank} < {last_rank}"
            );
            last_rank = rank;
        }
    }

    #[test]
    fn each_indicator_grades_independently() {
        let mut rules = RuleSet::new();
        rules.insert("a".to_string(), rule(Some(10.0), Some(1.0), Some(0.0)));
        rules.insert("b".to_string(), rule(Some(2.0), Some(1.0), Some(0.0)));

        let graded = grade_records(
            &[record("a", Some(5.0)), record("b", Some(5.0))],
            &rules,
        );
        assert_eq!(graded["a"].grade, Grade::Good);
        assert_eq!(graded["b"].grade, Grade::Excellent);
    }
}
