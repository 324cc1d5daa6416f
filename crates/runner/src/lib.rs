// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv-runner: isolated, time-bounded snippet execution

pub mod error;
pub mod exec;
pub mod profile;
pub mod sandbox;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use error::ExecError;
pub use exec::{ProcessRunner, SnippetExecutor};
#[cfg(any(test, feature = "test-support"))]
pub use fake::ScriptedExecutor;
pub use profile::{LangProfile, Profiles};
pub use sandbox::Sandbox;
