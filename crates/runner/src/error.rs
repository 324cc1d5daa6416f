// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner error types.
//!
//! Only failures to *start* a snippet surface as `Err`; a snippet that runs
//! and exits non-zero (or is killed at its timeout) is a regular
//! `ExecutionResult` for the comparator to classify.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("no language profile for '{0}'")]
    UnknownLanguage(String),
    #[error("language profile for '{0}' has an empty command")]
    InvalidProfile(String),
    #[error("failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("sandbox setup failed: {0}")]
    Sandbox(#[source] std::io::Error),
}
