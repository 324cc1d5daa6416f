// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed document and catalog containers.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use sv_core::Snippet;

/// One parsed document: its snippets in document order plus a content hash.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub path: PathBuf,
    /// Hex sha256 of the raw content (change detection, `sv list` display).
    pub hash: String,
    pub snippets: Vec<Snippet>,
}

impl Document {
    /// Snippets grouped by heading path, preserving document order.
    pub fn by_heading(&self) -> IndexMap<String, Vec<&Snippet>> {
        let mut groups: IndexMap<String, Vec<&Snippet>> = IndexMap::new();
        for snippet in &self.snippets {
            groups
                .entry(snippet.id.heading_path())
                .or_default()
                .push(snippet);
        }
        groups
    }

    pub fn short_hash(&self) -> &str {
        &self.hash[..self.hash.len().min(12)]
    }
}

/// A document that could not be parsed. The run continues without it.
#[derive(Debug, Serialize)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: String,
}

/// All documents loaded for one run, plus per-document failures.
#[derive(Debug, Serialize, Default)]
pub struct Catalog {
    pub documents: Vec<Document>,
    pub failures: Vec<DocumentFailure>,
}

impl Catalog {
    /// All snippets across all documents, in document order.
    pub fn snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.documents.iter().flat_map(|d| d.snippets.iter())
    }

    pub fn snippet_count(&self) -> usize {
        self.documents.iter().map(|d| d.snippets.len()).sum()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
