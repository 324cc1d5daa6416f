// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document discovery and catalog loading.

use crate::document::{Catalog, DocumentFailure};
use crate::parser::parse_document;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions recognized as outline documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["org", "outline"];

/// Errors fatal to the whole run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no documents found under the given paths")]
    NoDocuments,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Expand a path list into concrete document files.
///
/// Directories are scanned recursively for recognized extensions; explicit
/// file paths are taken as-is regardless of extension. The result is sorted
/// so repeat runs see documents in the same order.
pub fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            scan_dir(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            tracing::warn!(path = %path.display(), "skipping nonexistent path");
        }
    }
    files.sort();
    files.dedup();
    if files.is_empty() {
        return Err(CatalogError::NoDocuments);
    }
    Ok(files)
}

/// Load and parse every document under `paths`.
///
/// Unreadable or malformed documents are recorded as failures and skipped;
/// only an empty path expansion is fatal.
pub fn load_catalog(paths: &[PathBuf]) -> Result<Catalog, CatalogError> {
    let files = collect_documents(paths)?;
    let mut catalog = Catalog::default();

    for path in files {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                catalog.failures.push(DocumentFailure {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };
        match parse_document(&path, &content) {
            Ok(doc) => catalog.documents.push(doc),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping malformed document");
                catalog.failures.push(DocumentFailure {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(catalog)
}

fn scan_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), std::io::Error> {
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if is_document(&path) {
                files.push(path);
            }
        }
    }
    Ok(())
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
