// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline records: execution results and comparison outcomes.
//!
//! Each [`ExecutionResult`] belongs to exactly one snippet invocation and is
//! consumed by the comparator; each [`ComparisonOutcome`] is derived from
//! exactly one result. Neither is mutated after creation.

use crate::snippet::SnippetId;
use serde::{Deserialize, Serialize};

/// Exit status recorded when an invocation is killed at its timeout.
/// Matches the coreutils `timeout` convention.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Captured output of one snippet invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub id: SnippetId,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration_ms: u64,
    /// True when the invocation was killed at the per-snippet timeout.
    /// `exit_code` is then the synthetic [`TIMEOUT_EXIT_CODE`].
    #[serde(default)]
    pub timed_out: bool,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0 && !self.timed_out
    }
}

/// Classification of a compared snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Output matched the declared expectation.
    Passed,
    /// No expectation declared; the snippet is documentation-only.
    Informational,
    /// Output differed from the expectation.
    Mismatch,
    /// The snippet exited non-zero or could not be started.
    ExecFailed,
    /// The snippet exceeded its time bound.
    TimedOut,
}

crate::simple_display! {
    OutcomeKind {
        Passed => "passed",
        Informational => "informational",
        Mismatch => "mismatch",
        ExecFailed => "error",
        TimedOut => "timeout",
    }
}

/// Verdict for one snippet, produced by the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub id: SnippetId,
    pub kind: OutcomeKind,
    /// Labeled line diff; present iff `kind` is [`OutcomeKind::Mismatch`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    /// Failure detail (stderr excerpt, spawn error text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub duration_ms: u64,
}

impl ComparisonOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.kind, OutcomeKind::Passed | OutcomeKind::Informational)
    }

    /// Outcome for a snippet with no oracle (always passes).
    pub fn informational(id: SnippetId, duration_ms: u64) -> Self {
        Self {
            id,
            kind: OutcomeKind::Informational,
            diff: None,
            detail: None,
            duration_ms,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
