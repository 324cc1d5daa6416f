// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-bounded snippet execution with output capture.

use crate::error::ExecError;
use crate::profile::Profiles;
use crate::sandbox::Sandbox;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use sv_core::{ExecutionResult, Snippet, TIMEOUT_EXIT_CODE};
use tokio::io::AsyncReadExt;

/// Captured stdout/stderr are truncated to this many bytes per stream.
const CAPTURE_LIMIT: usize = 64 * 1024;

/// Seam between the harness and the real subprocess runner, so pipeline
/// behavior can be tested with a scripted fake.
#[async_trait]
pub trait SnippetExecutor: Send + Sync {
    async fn execute(&self, snippet: &Snippet) -> Result<ExecutionResult, ExecError>;
}

/// Runs snippets in throwaway sandboxes via `tokio::process`.
#[derive(Clone)]
pub struct ProcessRunner {
    profiles: Profiles,
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(profiles: Profiles, timeout: Duration) -> Self {
        Self { profiles, timeout }
    }
}

#[async_trait]
impl SnippetExecutor for ProcessRunner {
    async fn execute(&self, snippet: &Snippet) -> Result<ExecutionResult, ExecError> {
        let profile = self
            .profiles
            .get(&snippet.lang)
            .ok_or_else(|| ExecError::UnknownLanguage(snippet.lang.clone()))?;

        let sandbox = Sandbox::create()?;
        let source = profile.render(&snippet.source, &snippet.imports);
        let file = sandbox.write_source(&profile.extension, &source)?;
        let argv = profile.command_for(&file.to_string_lossy());

        let exec_span = tracing::info_span!(
            "runner.exec",
            snippet = %snippet.id,
            lang = %snippet.lang,
            invocation = %sandbox.invocation,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let start = Instant::now();
        let program = argv
            .first()
            .cloned()
            .ok_or_else(|| ExecError::InvalidProfile(snippet.lang.clone()))?;

        let mut command = tokio::process::Command::new(&program);
        command.args(&argv[1..]);
        command.current_dir(sandbox.path());
        // Scrubbed environment: the snippet sees PATH plus a HOME inside the
        // sandbox, so environment and filesystem effects stay scoped.
        command.env_clear();
        if let Ok(path) = std::env::var("PATH") {
            command.env("PATH", path);
        }
        command.env("HOME", sandbox.path());
        command.env("LC_ALL", "C");
        command.stdin(std::process::Stdio::null());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| ExecError::SpawnFailed {
            command: program.clone(),
            source,
        })?;

        // Drain pipes concurrently so a chatty snippet can't deadlock on a
        // full pipe buffer while we wait on its exit.
        let stdout_task = drain(child.stdout.take());
        let stderr_task = drain(child.stderr.take());

        let (exit_code, timed_out) = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => {
                let status = status.map_err(|source| ExecError::SpawnFailed {
                    command: program.clone(),
                    source,
                })?;
                (status.code().unwrap_or(-1), false)
            }
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::warn!(error = %e, "failed to kill timed-out snippet");
                }
                let _ = child.wait().await;
                (TIMEOUT_EXIT_CODE, true)
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();
        let duration_ms = start.elapsed().as_millis() as u64;

        exec_span.record("exit_code", exit_code);
        exec_span.record("duration_ms", duration_ms);

        Ok(ExecutionResult {
            id: snippet.id.clone(),
            stdout: truncate_capture(&stdout, CAPTURE_LIMIT),
            stderr: truncate_capture(&stderr, CAPTURE_LIMIT),
            exit_code,
            duration_ms,
            timed_out,
        })
    }
}

/// Read a child pipe to the end on a background task.
fn drain<R>(pipe: Option<R>) -> tokio::task::JoinHandle<Vec<u8>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut reader) = pipe {
            let _ = reader.read_to_end(&mut buf).await;
        }
        buf
    })
}

/// Lossy-decode a byte buffer into a UTF-8–safe capture of at most `limit` bytes.
fn truncate_capture(bytes: &[u8], limit: usize) -> String {
    let s = String::from_utf8_lossy(bytes);
    if s.len() <= limit {
        return s.into_owned();
    }
    let mut end = limit.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
