// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Labeled line diff between expected and actual output.
//!
//! Unchanged leading/trailing lines are shown with a two-space margin;
//! the differing middle is shown as `-expected` / `+actual` lines. Small
//! outputs don't warrant a full LCS diff.

/// Render a diff between two normalized line sequences. Non-empty whenever
/// the sequences differ.
pub fn render_diff(expected: &[String], actual: &[String]) -> String {
    let prefix = common_prefix(expected, actual);
    let suffix = common_suffix(&expected[prefix..], &actual[prefix..]);

    let mut out = Vec::new();
    for line in &expected[..prefix] {
        out.push(format!("  {}", line));
    }
    for line in &expected[prefix..expected.len() - suffix] {
        out.push(format!("- {}", line));
    }
    for line in &actual[prefix..actual.len() - suffix] {
        out.push(format!("+ {}", line));
    }
    for line in &expected[expected.len() - suffix..] {
        out.push(format!("  {}", line));
    }

    if out.is_empty() {
        // Unreachable for differing inputs; kept so the contract (non-empty
        // diff) holds even on misuse.
        out.push("(no line differences)".to_string());
    }
    out.join("\n")
}

fn common_prefix(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[String], b: &[String]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
