//! Evaluation window resolution.
//!
//! The window never starts before the resident's admission or the
//! evaluation's own nominal start, and never extends past discharge or
//! into a day that is still in progress.

use chrono::{Days, Local, NaiveDate};
use thiserror::Error;

use crate::models::PeriodWindow;

/// Calendar date format used across the pipeline.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string that does not parse as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format: {value:?} (expected YYYY-MM-DD)")]
pub struct InvalidDateFormat {
    pub value: String,
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, InvalidDateFormat> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| InvalidDateFormat {
        value: value.to_string(),
    })
}

/// Resolve the evaluation window against today's wall clock.
pub fn resolve(
    admission_date: &str,
    evaluation_start: &str,
    discharge_date: Option<&str>,
) -> Result<PeriodWindow, InvalidDateFormat> {
    resolve_at(
        admission_date,
        evaluation_start,
        discharge_date,
        Local::now().date_naive(),
    )
}

/// Resolve the evaluation window against an explicit reference date.
///
/// The window ends the day before `today`, so records from a day still in
/// progress are never evaluated; a discharge date caps it further.
pub fn resolve_at(
    admission_date: &str,
    evaluation_start: &str,
    discharge_date: Option<&str>,
    today: NaiveDate,
) -> Result<PeriodWindow, InvalidDateFormat> {
    let admission = parse_date(admission_date)?;
    let evaluation = parse_date(evaluation_start)?;
    let start = admission.max(evaluation);

    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    let end = match discharge_date {
        Some(discharge) => yesterday.min(parse_date(discharge)?),
        None => yesterday,
    };

    Ok(PeriodWindow::new(start, end))
}
