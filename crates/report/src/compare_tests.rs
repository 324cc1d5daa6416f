// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sv_core::test_support::{exec_result, snippet_id};
use sv_core::{Snippet, TIMEOUT_EXIT_CODE};
use yare::parameterized;

fn checked(expected: &str) -> Snippet {
    Snippet::builder().expected(expected).build()
}

#[test]
fn matching_output_passes() {
    let snippet = checked("0 2");
    let result = exec_result(snippet.id.clone(), "0 2\n", 0);
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.kind, OutcomeKind::Passed);
    assert!(outcome.passed());
    assert!(outcome.diff.is_none());
}

#[test]
fn differing_output_yields_nonempty_diff() {
    let snippet = checked("0 2");
    let result = exec_result(snippet.id.clone(), "0 3\n", 0);
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.kind, OutcomeKind::Mismatch);
    assert!(!outcome.passed());
    let diff = outcome.diff.unwrap();
    assert!(diff.contains("- 0 2"));
    assert!(diff.contains("+ 0 3"));
}

#[parameterized(
    trailing_spaces = { "0 2", "0 2   \n" },
    trailing_tab = { "0 2\t", "0 2\n" },
    trailing_blank_lines = { "0 2", "0 2\n\n\n" },
    missing_final_newline = { "0 2\n", "0 2" },
)]
fn comparison_ignores_trailing_whitespace(expected: &str, actual: &str) {
    let snippet = checked(expected);
    let result = exec_result(snippet.id.clone(), actual, 0);
    assert_eq!(compare(&snippet, &result).kind, OutcomeKind::Passed);
}

#[test]
fn interior_whitespace_still_matters() {
    let snippet = checked("0  2");
    let result = exec_result(snippet.id.clone(), "0 2\n", 0);
    assert_eq!(compare(&snippet, &result).kind, OutcomeKind::Mismatch);
}

#[test]
fn no_expectation_is_informational() {
    let snippet = Snippet::builder().build();
    let result = exec_result(snippet.id.clone(), "whatever\n", 0);
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.kind, OutcomeKind::Informational);
    assert!(outcome.passed());
}

#[test]
fn nonzero_exit_is_error_even_without_expectation() {
    let snippet = Snippet::builder().build();
    let mut result = exec_result(snippet.id.clone(), "", 2);
    result.stderr = "boom\n".to_string();
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.kind, OutcomeKind::ExecFailed);
    assert_eq!(outcome.detail.as_deref(), Some("exit code 2: boom"));
}

#[test]
fn nonzero_exit_without_stderr_reports_code_only() {
    let snippet = checked("x");
    let result = exec_result(snippet.id.clone(), "", 1);
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.detail.as_deref(), Some("exit code 1"));
}

#[test]
fn timeout_takes_precedence() {
    let snippet = checked("0 2");
    let mut result = exec_result(snippet.id.clone(), "0 2\n", TIMEOUT_EXIT_CODE);
    result.timed_out = true;
    result.duration_ms = 10_000;
    let outcome = compare(&snippet, &result);
    assert_eq!(outcome.kind, OutcomeKind::TimedOut);
    assert_eq!(outcome.detail.as_deref(), Some("killed after 10000ms"));
}

#[test]
fn outcome_carries_snippet_identity() {
    let id = snippet_id("notes.org", 3, &["Maps"], 2);
    let snippet = Snippet::builder().id(id.clone()).expected("x").build();
    let result = exec_result(id.clone(), "x\n", 0);
    assert_eq!(compare(&snippet, &result).id, id);
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use sv_core::test_support::strategies::arb_output_text;

    proptest! {
        /// Comparing any text against itself passes regardless of trailing
        /// whitespace noise.
        #[test]
        fn self_comparison_passes(text in arb_output_text()) {
            let snippet = Snippet::builder().expected(text.clone()).build();
            let result = exec_result(snippet.id.clone(), &text, 0);
            prop_assert!(compare(&snippet, &result).passed());
        }

        /// A mismatch always carries a non-empty diff.
        #[test]
        fn mismatch_has_diff(a in arb_output_text(), b in arb_output_text()) {
            let snippet = Snippet::builder().expected(a.clone()).build();
            let result = exec_result(snippet.id.clone(), &b, 0);
            let outcome = compare(&snippet, &result);
            if outcome.kind == OutcomeKind::Mismatch {
                prop_assert!(!outcome.diff.unwrap_or_default().is_empty());
            }
        }
    }
}
