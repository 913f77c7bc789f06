use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive evaluation date range.
///
/// A window whose start lies after its end is empty: it contains no dates
/// and excludes every record. That state is valid, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
