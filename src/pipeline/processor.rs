//! Evaluation pipeline orchestrator.
//!
//! Single entry point driving the full flow for one resident:
//! resolve window → discover corpus → extract in parallel → consistency
//! check → merge external and derived records → filter → aggregate →
//! grade → mask → assemble.
//!
//! The text extractor is trait-injected so the pipeline stays testable
//! without real documents.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::config::EvaluationConfig;
use crate::models::{DatedRecord, ReportData, Subject};

use super::assemble::assemble;
use super::consistency::cross_check;
use super::corpus;
use super::extraction::TextExtractor;
use super::grading::grade_records;
use super::masking::{mask_subject, InvalidIdentifier};
use super::parallel::{extract_all, BatchError, BatchOutcome, FailedDocument};
use super::period::{resolve_at, InvalidDateFormat};
use super::record_filter::filter_by_period;
use super::scan::{aggregate_counts, derive_records};

/// Errors that abort an evaluation run. Per-document extraction failures
/// are not among them; those are data, carried in [`EvaluationOutcome`].
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("date resolution failed: {0}")]
    Date(#[from] InvalidDateFormat),

    #[error("identity masking failed: {0}")]
    Masking(#[from] InvalidIdentifier),

    #[error("extraction batch failed: {0}")]
    Batch(#[from] BatchError),
}

/// Everything the caller renders: the report plus the consolidated list of
/// documents that could not be read.
#[derive(Debug)]
pub struct EvaluationOutcome {
    pub report: ReportData,
    pub extraction_failures: Vec<FailedDocument>,
}

/// Orchestrates one resident's evaluation.
pub struct EvaluationPipeline<E: TextExtractor> {
    extractor: E,
    config: EvaluationConfig,
}

impl<E: TextExtractor> EvaluationPipeline<E> {
    pub fn new(extractor: E, config: EvaluationConfig) -> Self {
        Self { extractor, config }
    }

    /// Evaluate a subject against every document under `document_root`.
    pub fn evaluate(
        &self,
        subject: &Subject,
        document_root: &Path,
        external_records: &[DatedRecord],
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let documents = corpus::discover(document_root);
        self.evaluate_documents(subject, &documents, external_records)
    }

    /// Evaluate against an explicit document list.
    pub fn evaluate_documents(
        &self,
        subject: &Subject,
        documents: &[PathBuf],
        external_records: &[DatedRecord],
    ) -> Result<EvaluationOutcome, EvaluationError> {
        self.evaluate_documents_at(
            subject,
            documents,
            external_records,
            Local::now().date_naive(),
        )
    }

    /// Evaluate with an explicit reference date, the "today" the window's
    /// end is resolved against.
    pub fn evaluate_documents_at(
        &self,
        subject: &Subject,
        documents: &[PathBuf],
        external_records: &[DatedRecord],
        today: NaiveDate,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        tracing::info!(
            facility = %subject.facility,
            documents = documents.len(),
            "evaluation started"
        );

        let window = resolve_at(
            &subject.admission_date,
            &subject.evaluation_start,
            subject.discharge_date.as_deref(),
            today,
        )?;
        tracing::debug!(start = %window.start, end = %window.end, "evaluation window resolved");

        let BatchOutcome {
            successes,
            failures,
        } = extract_all(&self.extractor, documents, self.config.worker_count)?;
        if !failures.is_empty() {
            tracing::warn!(
                failed = failures.len(),
                "some documents could not be extracted; continuing with the rest"
            );
        }
        let texts: Vec<String> = successes.into_iter().map(|doc| doc.text).collect();

        let consistency_errors = cross_check(&texts, &self.config.required_keywords);

        let mut records: Vec<DatedRecord> = external_records.to_vec();
        for text in &texts {
            records.extend(derive_records(text, &self.config.rules));
        }
        let in_window = filter_by_period(&records, &window)?;
        let aggregated = aggregate_counts(&in_window);
        let indicators = grade_records(&aggregated, &self.config.rules);

        let identity = mask_subject(subject)?;
        let report = assemble(identity, window, indicators, consistency_errors);

        tracing::info!(
            indicators = report.indicators.len(),
            consistency_errors = report.consistency_errors.len(),
            failed_documents = failures.len(),
            "evaluation complete"
        );

        Ok(EvaluationOutcome {
            report,
            extraction_failures: failures,
        })
    }
}
