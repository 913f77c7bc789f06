use serde::{Deserialize, Serialize};

/// Identity of the resident under evaluation, as supplied by the caller.
///
/// Dates are `YYYY-MM-DD` strings; the components that consume them parse
/// and validate. Raw name and identifier never leave the pipeline; only
/// the derived [`MaskedIdentity`] crosses the renderer boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub identifier: String,
    pub admission_date: String,
    pub discharge_date: Option<String>,
    pub evaluation_start: String,
    /// Facility or care-group label (e.g. residential, day-care, home-visit).
    pub facility: String,
}

/// Display-safe identity derived from a [`Subject`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskedIdentity {
    pub name: String,
    pub identifier: String,
    pub facility: String,
    pub admission_date: String,
    pub discharge_date: Option<String>,
}
