// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv-report: output comparison and run aggregation

pub mod compare;
pub mod diff;
pub mod summary;

pub use compare::{compare, normalize};
pub use diff::render_diff;
pub use summary::{Aggregator, ParseFailure, RunReport, Summary};
