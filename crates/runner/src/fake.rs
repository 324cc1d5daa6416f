// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted executor for harness tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::error::ExecError;
use crate::exec::SnippetExecutor;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use sv_core::{ExecutionResult, Snippet, SnippetId};

/// Executor that replays canned results keyed by snippet id.
///
/// Unknown snippets succeed with empty output. An optional per-call delay
/// makes concurrency and cancellation observable in tests.
#[derive(Clone, Default)]
pub struct ScriptedExecutor {
    results: HashMap<String, ScriptedResult>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

#[derive(Clone)]
enum ScriptedResult {
    Output { stdout: String, exit_code: i32 },
    TimedOut,
    Fails(String),
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(mut self, id: &SnippetId, stdout: &str) -> Self {
        self.results.insert(
            id.to_string(),
            ScriptedResult::Output {
                stdout: stdout.to_string(),
                exit_code: 0,
            },
        );
        self
    }

    pub fn exits(mut self, id: &SnippetId, exit_code: i32, stdout: &str) -> Self {
        self.results.insert(
            id.to_string(),
            ScriptedResult::Output {
                stdout: stdout.to_string(),
                exit_code,
            },
        );
        self
    }

    pub fn times_out(mut self, id: &SnippetId) -> Self {
        self.results.insert(id.to_string(), ScriptedResult::TimedOut);
        self
    }

    pub fn fails_to_start(mut self, id: &SnippetId, message: &str) -> Self {
        self.results
            .insert(id.to_string(), ScriptedResult::Fails(message.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `execute` calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnippetExecutor for ScriptedExecutor {
    async fn execute(&self, snippet: &Snippet) -> Result<ExecutionResult, ExecError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.results.get(&snippet.id.to_string()) {
            Some(ScriptedResult::Output { stdout, exit_code }) => Ok(ExecutionResult {
                id: snippet.id.clone(),
                stdout: stdout.clone(),
                stderr: String::new(),
                exit_code: *exit_code,
                duration_ms: 1,
                timed_out: false,
            }),
            Some(ScriptedResult::TimedOut) => Ok(ExecutionResult {
                id: snippet.id.clone(),
                stdout: String::new(),
                stderr: String::new(),
                exit_code: sv_core::TIMEOUT_EXIT_CODE,
                duration_ms: 1,
                timed_out: true,
            }),
            Some(ScriptedResult::Fails(message)) => Err(ExecError::SpawnFailed {
                command: "scripted".to_string(),
                source: std::io::Error::other(message.clone()),
            }),
            None => Ok(ExecutionResult {
                id: snippet.id.clone(),
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 0,
                duration_ms: 1,
                timed_out: false,
            }),
        }
    }
}
