// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The run pipeline: dispatch snippets over a bounded worker pool, compare
//! captured output, collect everything into an ordered [`RunReport`].
//!
//! Cancellation stops dispatch of new snippets; in-flight snippets run to
//! completion (their own timeout still applies) so their outcomes are not
//! lost. A cancelled run is marked interrupted and fails.

use crate::config::RunConfig;
use std::path::PathBuf;
use std::sync::Arc;
use sv_catalog::{load_catalog, Catalog, CatalogError};
use sv_core::{Clock, ComparisonOutcome, OutcomeKind, Snippet};
use sv_report::{compare, Aggregator, RunReport};
use sv_runner::{ProcessRunner, SnippetExecutor};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Load documents from `paths` and verify them with the real runner.
pub async fn run(
    paths: &[PathBuf],
    config: &RunConfig,
    cancel: &CancellationToken,
    clock: &impl Clock,
) -> Result<RunReport, CatalogError> {
    let catalog = load_catalog(paths)?;
    let executor = Arc::new(ProcessRunner::new(config.profiles.clone(), config.timeout));
    Ok(run_catalog(&catalog, executor, config, cancel, clock).await)
}

/// Verify an already-loaded catalog with the given executor.
pub async fn run_catalog(
    catalog: &Catalog,
    executor: Arc<dyn SnippetExecutor>,
    config: &RunConfig,
    cancel: &CancellationToken,
    clock: &impl Clock,
) -> RunReport {
    let started = clock.now();
    let mut aggregator = Aggregator::new();
    for failure in &catalog.failures {
        aggregator.record_parse_failure(failure.path.clone(), failure.error.clone());
    }

    tracing::info!(
        documents = catalog.documents.len(),
        snippets = catalog.snippet_count(),
        jobs = config.jobs,
        "run started"
    );

    let semaphore = Arc::new(Semaphore::new(config.jobs.max(1)));
    let mut workers: JoinSet<ComparisonOutcome> = JoinSet::new();
    let mut interrupted = false;

    for snippet in catalog.snippets() {
        if !selected(snippet, config.filter.as_deref()) {
            continue;
        }
        if !snippet.capture {
            // Tagged documentation-only; never executed.
            aggregator.record(ComparisonOutcome::informational(snippet.id.clone(), 0));
            continue;
        }
        if cancel.is_cancelled() {
            interrupted = true;
            break;
        }

        // Waiting for a permit here (not inside the worker) keeps dispatch
        // order deterministic and lets cancellation interrupt the wait.
        let permit = tokio::select! {
            _ = cancel.cancelled() => {
                interrupted = true;
                break;
            }
            permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                Ok(p) => p,
                Err(_) => break,
            }
        };

        let snippet = snippet.clone();
        let executor = Arc::clone(&executor);
        workers.spawn(async move {
            let _permit = permit;
            execute_one(executor.as_ref(), &snippet).await
        });
    }

    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(outcome) => aggregator.record(outcome),
            Err(e) => tracing::warn!(error = %e, "worker task failed"),
        }
    }

    if interrupted {
        tracing::warn!("run interrupted, remaining snippets not dispatched");
        aggregator.mark_interrupted();
    }

    let mut report = aggregator.finish();
    report.duration_ms = clock.now().duration_since(started).as_millis() as u64;
    tracing::info!(
        total = report.summary.total,
        failed = report.summary.failed(),
        duration_ms = report.duration_ms,
        "run finished"
    );
    report
}

async fn execute_one(executor: &dyn SnippetExecutor, snippet: &Snippet) -> ComparisonOutcome {
    match executor.execute(snippet).await {
        Ok(result) => compare(snippet, &result),
        Err(e) => {
            tracing::warn!(snippet = %snippet.id, error = %e, "snippet failed to run");
            ComparisonOutcome {
                id: snippet.id.clone(),
                kind: OutcomeKind::ExecFailed,
                diff: None,
                detail: Some(e.to_string()),
                duration_ms: 0,
            }
        }
    }
}

fn selected(snippet: &Snippet, filter: Option<&str>) -> bool {
    match filter {
        Some(needle) => snippet.id.to_string().contains(needle),
        None => true,
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
