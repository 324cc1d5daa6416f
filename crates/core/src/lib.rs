// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv-core: Shared vocabulary for the snippet verifier (sv) CLI tool

pub mod macros;

pub mod clock;
pub mod outcome;
pub mod snippet;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use outcome::{ComparisonOutcome, ExecutionResult, OutcomeKind, TIMEOUT_EXIT_CODE};
#[cfg(any(test, feature = "test-support"))]
pub use snippet::SnippetBuilder;
pub use snippet::{Snippet, SnippetId};
pub use time_fmt::{format_elapsed, format_elapsed_ms};
