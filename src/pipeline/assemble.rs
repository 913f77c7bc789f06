//! Result assembly.

use std::collections::BTreeMap;

use crate::models::{ConsistencyError, IndicatorResult, MaskedIdentity, PeriodWindow, ReportData};

/// Combine the run's artifacts into the record handed to the report
/// renderer. Pure aggregation; no I/O, and nothing beyond what the types
/// already guarantee is validated.
pub fn assemble(
    identity: MaskedIdentity,
    window: PeriodWindow,
    indicators: BTreeMap<String, IndicatorResult>,
    consistency_errors: Vec<ConsistencyError>,
) -> ReportData {
    ReportData {
        identity,
        window,
        indicators,
        consistency_errors,
    }
}
