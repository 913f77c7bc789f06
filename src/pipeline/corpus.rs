//! Document discovery for a resident's corpus folder.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension identifying supported documents (case-insensitive).
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Recursively discover candidate documents under `root`.
///
/// Traversal order is stable for a fixed filesystem state, so repeated runs
/// see the corpus in the same order. A missing folder yields an empty list,
/// not an error; unreadable subtrees are skipped.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "corpus folder missing or not a directory");
        return Vec::new();
    }

    let documents: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable corpus entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_document_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    tracing::debug!(root = %root.display(), count = documents.len(), "corpus discovered");
    documents
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}
