//! careval: rule-based quality evaluation for long-term-care documentation.
//!
//! The pipeline takes a resident's scanned document folder, extracts text
//! from every document in parallel, restricts analysis to the resolved
//! evaluation period, grades quality indicators against configured
//! thresholds, and cross-checks the corpus for mandatory content. The run
//! produces a single [`ReportData`] aggregate handed across the boundary to
//! an external report renderer.

pub mod config;
pub mod models;
pub mod pipeline;

pub use config::{ConfigError, EvaluationConfig, IndicatorRule, RuleSet};
pub use models::{
    ConsistencyError, DatedRecord, Grade, IndicatorResult, MaskedIdentity, PeriodWindow,
    RenderError, ReportData, ReportRenderer, Subject,
};
pub use pipeline::extraction::{ExtractionError, PdfTextExtractor, TextExtractor};
pub use pipeline::parallel::{BatchError, BatchOutcome, ExtractedDocument, FailedDocument};
pub use pipeline::{EvaluationError, EvaluationOutcome, EvaluationPipeline};
