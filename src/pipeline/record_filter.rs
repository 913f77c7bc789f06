//! Record period filtering.

use crate::models::{DatedRecord, PeriodWindow};

use super::period::{parse_date, InvalidDateFormat};

/// Keep the records dated inside `window`, preserving relative order.
///
/// Any record whose date does not parse fails the whole call; there is no
/// best-effort mode. An empty window keeps nothing.
pub fn filter_by_period(
    records: &[DatedRecord],
    window: &PeriodWindow,
) -> Result<Vec<DatedRecord>, InvalidDateFormat> {
    let mut kept = Vec::new();
    for record in records {
        let date = parse_date(&record.date)?;
        if window.contains(date) {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, indicator: &str) -> DatedRecord {
        DatedRecord {
            date: date.to_string(),
            indicator: indicator.to_string(),
            value: Some(1.0),
            payload: serde_json::Value::Null,
        }
    }

    fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> PeriodWindow {
        PeriodWindow::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn keeps_records_inside_the_window() {
        let records = vec![
            record("2024-01-15", "투약기록"),
            record("2025-03-01", "투약기록"),
            record("2025-07-16", "프로그램참여"),
        ];
        let kept =
            filter_by_period(&records, &window((2024, 2, 1), (2025, 7, 15))).unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, "2025-03-01");
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let records = vec![record("2024-02-01", "a"), record("2025-07-15", "b")];
        let kept =
            filter_by_period(&records, &window((2024, 2, 1), (2025, 7, 15))).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn preserves_relative_order() {
        let records = vec![
            record("2025-03-03", "c"),
            record("2025-03-01", "a"),
            record("2025-03-02", "b"),
        ];
        let kept =
            filter_by_period(&records, &window((2025, 1, 1), (2025, 12, 31))).unwrap();
        let indicators: Vec<_> = kept.iter().map(|r| r.indicator.as_str()).collect();
        assert_eq!(indicators, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_window_keeps_nothing() {
        let records = vec![record("2025-03-01", "a")];
        let kept =
            filter_by_period(&records, &window((2025, 7, 15), (2024, 2, 1))).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn one_unparseable_date_fails_the_whole_call() {
        let records = vec![
            record("2025-03-01", "a"),
            record("03/01/2025", "b"),
            record("2025-03-02", "c"),
        ];
        let err = filter_by_period(&records, &window((2025, 1, 1), (2025, 12, 31)))
            .unwrap_err();
        assert_eq!(err.value, "03/01/2025");
    }
}
