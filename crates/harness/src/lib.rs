// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv-harness: configuration and the bounded-concurrency run pipeline

pub mod config;
pub mod pool;

pub use config::{ConfigError, RunConfig, CONFIG_FILE, DEFAULT_TIMEOUT};
pub use pool::{run, run_catalog};
