// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output comparison: turn an execution result into a verdict.

use crate::diff::render_diff;
use sv_core::{ComparisonOutcome, ExecutionResult, OutcomeKind, Snippet};

/// Maximum stderr bytes carried into an error outcome's detail.
const DETAIL_LIMIT: usize = 2048;

/// Compare a snippet's captured output against its declared expectation.
///
/// Timeouts and non-zero exits take precedence over output comparison; a
/// snippet with no declared expectation is informational and passes as long
/// as it executed cleanly.
pub fn compare(snippet: &Snippet, result: &ExecutionResult) -> ComparisonOutcome {
    debug_assert_eq!(snippet.id, result.id);

    if result.timed_out {
        return ComparisonOutcome {
            id: result.id.clone(),
            kind: OutcomeKind::TimedOut,
            diff: None,
            detail: Some(format!("killed after {}ms", result.duration_ms)),
            duration_ms: result.duration_ms,
        };
    }

    if result.exit_code != 0 {
        return ComparisonOutcome {
            id: result.id.clone(),
            kind: OutcomeKind::ExecFailed,
            diff: None,
            detail: Some(error_detail(result)),
            duration_ms: result.duration_ms,
        };
    }

    let Some(expected) = snippet.expected.as_deref() else {
        return ComparisonOutcome::informational(result.id.clone(), result.duration_ms);
    };

    let expected_norm = normalize(expected);
    let actual_norm = normalize(&result.stdout);

    if expected_norm == actual_norm {
        ComparisonOutcome {
            id: result.id.clone(),
            kind: OutcomeKind::Passed,
            diff: None,
            detail: None,
            duration_ms: result.duration_ms,
        }
    } else {
        ComparisonOutcome {
            id: result.id.clone(),
            kind: OutcomeKind::Mismatch,
            diff: Some(render_diff(&expected_norm, &actual_norm)),
            detail: None,
            duration_ms: result.duration_ms,
        }
    }
}

/// Normalize output for comparison: strip trailing whitespace per line and
/// drop trailing blank lines.
pub fn normalize(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn error_detail(result: &ExecutionResult) -> String {
    let stderr = result.stderr.trim_end();
    if stderr.is_empty() {
        format!("exit code {}", result.exit_code)
    } else {
        let mut end = DETAIL_LIMIT.min(stderr.len());
        while end > 0 && !stderr.is_char_boundary(end) {
            end -= 1;
        }
        format!("exit code {}: {}", result.exit_code, &stderr[..end])
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
