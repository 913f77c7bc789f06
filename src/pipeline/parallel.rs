//! Parallel extraction coordinator.
//!
//! Fans a document list out to a fixed pool of worker threads. Each
//! document is an isolated unit of work: an extraction error or panic is
//! captured as that document's failure and never aborts the batch. The
//! scope join is the completion barrier; workers share nothing but an
//! atomic cursor over the immutable document slice.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use thiserror::Error;

use super::extraction::TextExtractor;

#[derive(Debug, Error)]
pub enum BatchError {
    /// The batch could not be started at all.
    #[error("no extraction workers available (worker count is zero)")]
    NoWorkers,
}

/// A document whose text was extracted.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub path: PathBuf,
    pub text: String,
}

/// A document whose extraction failed.
#[derive(Debug, Clone)]
pub struct FailedDocument {
    pub path: PathBuf,
    pub error: String,
}

/// One extraction batch, partitioned by outcome. Every submitted document
/// lands in exactly one of the two lists.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub successes: Vec<ExtractedDocument>,
    pub failures: Vec<FailedDocument>,
}

/// Extract every document using up to `worker_count` workers.
///
/// `None` sizes the pool to the host's available parallelism. Results are
/// collected as they complete; completion order is unrelated to submission
/// order.
pub fn extract_all<E: TextExtractor>(
    extractor: &E,
    documents: &[PathBuf],
    worker_count: Option<usize>,
) -> Result<BatchOutcome, BatchError> {
    let requested = worker_count.unwrap_or_else(default_worker_count);
    if requested == 0 {
        return Err(BatchError::NoWorkers);
    }
    if documents.is_empty() {
        return Ok(BatchOutcome::default());
    }
    let workers = requested.min(documents.len());

    let cursor = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            scope.spawn(move || loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(path) = documents.get(index) else {
                    break;
                };
                if tx.send(extract_one(extractor, path)).is_err() {
                    break;
                }
            });
        }
    });
    drop(tx);

    let mut outcome = BatchOutcome::default();
    for result in rx {
        match result {
            Ok(doc) => outcome.successes.push(doc),
            Err(failed) => outcome.failures.push(failed),
        }
    }

    tracing::info!(
        total = documents.len(),
        succeeded = outcome.successes.len(),
        failed = outcome.failures.len(),
        workers,
        "extraction batch complete"
    );
    Ok(outcome)
}

fn default_worker_count() -> usize {
    thread::available_parallelism().map(usize::from).unwrap_or(1)
}

fn extract_one<E: TextExtractor>(
    extractor: &E,
    path: &Path,
) -> Result<ExtractedDocument, FailedDocument> {
    match catch_unwind(AssertUnwindSafe(|| extractor.extract(path))) {
        Ok(Ok(text)) => Ok(ExtractedDocument {
            path: path.to_path_buf(),
            text,
        }),
        Ok(Err(err)) => Err(FailedDocument {
            path: path.to_path_buf(),
            error: err.to_string(),
        }),
        Err(panic) => Err(FailedDocument {
            path: path.to_path_buf(),
            error: panic_message(panic.as_ref()),
        }),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("extraction panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("extraction panicked: {s}")
    } else {
        "extraction panicked".to_string()
    }
}
