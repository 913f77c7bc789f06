pub mod period;
pub mod record;
pub mod report;
pub mod subject;

pub use period::PeriodWindow;
pub use record::DatedRecord;
pub use report::{
    ConsistencyError, Grade, IndicatorResult, RenderError, ReportData, ReportRenderer,
};
pub use subject::{MaskedIdentity, Subject};
