// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report aggregation: collect outcomes, sort into document order, count.

use serde::Serialize;
use std::path::PathBuf;
use sv_core::{ComparisonOutcome, OutcomeKind};

/// A document that never produced outcomes because it failed to parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate counts over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub informational: usize,
    pub mismatches: usize,
    pub errors: usize,
    pub timeouts: usize,
    pub parse_failures: usize,
    /// True when the run was cancelled before every snippet was dispatched.
    pub interrupted: bool,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.mismatches + self.errors + self.timeouts
    }

    /// A run is clean when nothing failed, nothing was skipped by parse
    /// errors, and nothing was left unverified by an interrupt.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.parse_failures == 0 && !self.interrupted
    }
}

/// Collects per-snippet outcomes and parse failures as they arrive
/// (in completion order) and produces the final ordered report.
#[derive(Default)]
pub struct Aggregator {
    outcomes: Vec<ComparisonOutcome>,
    parse_failures: Vec<ParseFailure>,
    interrupted: bool,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ComparisonOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn record_parse_failure(&mut self, path: PathBuf, error: String) {
        self.parse_failures.push(ParseFailure { path, error });
    }

    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Sort collected outcomes into stable document order and count them up.
    pub fn finish(self) -> RunReport {
        let mut outcomes = self.outcomes;
        outcomes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut summary = Summary {
            total: outcomes.len(),
            parse_failures: self.parse_failures.len(),
            interrupted: self.interrupted,
            ..Summary::default()
        };
        for outcome in &outcomes {
            match outcome.kind {
                OutcomeKind::Passed => summary.passed += 1,
                OutcomeKind::Informational => summary.informational += 1,
                OutcomeKind::Mismatch => summary.mismatches += 1,
                OutcomeKind::ExecFailed => summary.errors += 1,
                OutcomeKind::TimedOut => summary.timeouts += 1,
            }
        }

        RunReport {
            outcomes,
            parse_failures: self.parse_failures,
            summary,
            duration_ms: 0,
        }
    }
}

/// The final report for one run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<ComparisonOutcome>,
    pub parse_failures: Vec<ParseFailure>,
    pub summary: Summary,
    /// Wall-clock duration of the whole run; filled in by the harness.
    pub duration_ms: u64,
}

impl RunReport {
    /// Outcomes that need attention, in document order.
    pub fn failing(&self) -> impl Iterator<Item = &ComparisonOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Process exit code: 0 iff the run was clean.
    pub fn exit_code(&self) -> i32 {
        if self.summary.all_passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
