// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snippet identity and the immutable snippet record.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of one code block within the catalog.
///
/// Combines the document path, the heading path of the enclosing outline
/// sections, and a 1-based ordinal among blocks under that heading. `seq` is
/// the 0-based position of the block within its document; the derived `Ord`
/// sorts by `(document, seq)`, which is the stable document order the report
/// presents results in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnippetId {
    pub document: PathBuf,
    /// Position of the block within its document (0-based).
    pub seq: u32,
    /// Enclosing heading titles, outermost first.
    #[serde(default)]
    pub heading: Vec<String>,
    /// Ordinal among blocks sharing this heading path (1-based).
    pub ordinal: u32,
}

impl SnippetId {
    pub fn new(
        document: impl Into<PathBuf>,
        seq: u32,
        heading: Vec<String>,
        ordinal: u32,
    ) -> Self {
        Self {
            document: document.into(),
            seq,
            heading,
            ordinal,
        }
    }

    /// Heading titles joined with `/` (empty string for top-level blocks).
    ///
    /// Display only: a title containing a literal `/` renders the same as a
    /// nested path. Identity and ordinal counting use the title list itself.
    pub fn heading_path(&self) -> String {
        self.heading.join("/")
    }
}

impl std::fmt::Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}#{}#{}",
            self.document.display(),
            self.heading_path(),
            self.ordinal
        )
    }
}

/// One labeled example block extracted from a document.
///
/// Created by the catalog parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    /// Language tag from the block opener (e.g. "go", "python", "sh").
    pub lang: String,
    pub source: String,
    /// Declared import names, in declaration order.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Oracle text from the associated expected-output block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// False when the block was tagged `:no-capture` — the snippet is
    /// documentation-only and is never executed.
    pub capture: bool,
}

impl Snippet {
    /// True when the snippet has no oracle to check against.
    pub fn is_informational(&self) -> bool {
        !self.capture || self.expected.is_none()
    }
}

crate::builder! {
    pub struct SnippetBuilder => Snippet {
        into {
            lang: String = "sh",
            source: String = "echo hi",
        }
        set {
            id: SnippetId = SnippetId::new("doc.org", 0, Vec::new(), 1),
            imports: Vec<String> = Vec::new(),
            capture: bool = true,
        }
        option {
            expected: String = None,
        }
    }
}

#[cfg(test)]
#[path = "snippet_tests.rs"]
mod tests;
