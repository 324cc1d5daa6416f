// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ComparisonOutcome, ExecutionResult, OutcomeKind, Snippet, SnippetId};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for pipeline record types.
pub mod strategies {
    use crate::OutcomeKind;
    use proptest::prelude::*;

    pub fn arb_outcome_kind() -> impl Strategy<Value = OutcomeKind> {
        prop_oneof![
            Just(OutcomeKind::Passed),
            Just(OutcomeKind::Informational),
            Just(OutcomeKind::Mismatch),
            Just(OutcomeKind::ExecFailed),
            Just(OutcomeKind::TimedOut),
        ]
    }

    /// Printable output text: a handful of short lines, optionally with
    /// trailing whitespace (the comparator must ignore it).
    pub fn arb_output_text() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z0-9 ]{0,12}( |\t)?", 0..5)
            .prop_map(|lines| lines.join("\n"))
    }
}

// ── Record factory functions ────────────────────────────────────────────

pub fn snippet_id(document: &str, seq: u32, heading: &[&str], ordinal: u32) -> SnippetId {
    SnippetId::new(
        document,
        seq,
        heading.iter().map(|s| s.to_string()).collect(),
        ordinal,
    )
}

pub fn checked_snippet(document: &str, seq: u32, expected: &str) -> Snippet {
    Snippet::builder()
        .id(snippet_id(document, seq, &[], seq + 1))
        .expected(expected)
        .build()
}

pub fn exec_result(id: SnippetId, stdout: &str, exit_code: i32) -> ExecutionResult {
    ExecutionResult {
        id,
        stdout: stdout.to_string(),
        stderr: String::new(),
        exit_code,
        duration_ms: 5,
        timed_out: false,
    }
}

pub fn outcome(id: SnippetId, kind: OutcomeKind) -> ComparisonOutcome {
    ComparisonOutcome {
        id,
        kind,
        diff: matches!(kind, OutcomeKind::Mismatch).then(|| "-expected\n+actual".to_string()),
        detail: None,
        duration_ms: 5,
    }
}
