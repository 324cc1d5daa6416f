// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sv check` — run every snippet and compare captured output.

use crate::color;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use sv_core::{format_elapsed_ms, SystemClock};
use sv_harness::RunConfig;
use sv_report::RunReport;
use tokio_util::sync::CancellationToken;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Documents or directories to verify (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Maximum snippets to run at once (default: CPU count)
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Per-snippet timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Only run snippets whose identity contains this substring
    #[arg(long, value_name = "SUBSTR")]
    pub filter: Option<String>,

    /// Config file (default: ./sv.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub async fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let mut config = RunConfig::load(args.config.as_deref())
        .map_err(|e| ExitError::config(e.to_string()))?;
    if let Some(secs) = args.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }
    if let Some(jobs) = args.jobs {
        config = config.jobs(jobs.max(1));
    }
    if let Some(filter) = args.filter {
        config = config.filter(filter);
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };

    // First Ctrl-C stops dispatch; in-flight snippets finish (or hit their
    // own timeout) so the report stays coherent.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("interrupted, waiting for in-flight snippets");
                cancel.cancel();
            }
        });
    }

    let report = sv_harness::run(&paths, &config, &cancel, &SystemClock)
        .await
        .map_err(|e| ExitError::config(e.to_string()))?;

    crate::output::format_or_json(args.output, &report, || {
        render_report(&report, &mut std::io::stdout())
    })?;
    Ok(report.exit_code())
}

/// Render the text report: one section per failure, then the summary line.
pub fn render_report(report: &RunReport, out: &mut dyn Write) -> anyhow::Result<()> {
    for outcome in report.failing() {
        let marker = color::fail(&outcome.kind.to_string().to_uppercase());
        writeln!(out, "{} {}", marker, outcome.id)?;
        if let Some(detail) = &outcome.detail {
            writeln!(out, "  {}", color::muted(detail))?;
        }
        if let Some(diff) = &outcome.diff {
            for line in diff.lines() {
                writeln!(out, "  {}", line)?;
            }
        }
        writeln!(out)?;
    }

    for failure in &report.parse_failures {
        writeln!(
            out,
            "{} {}: {}",
            color::fail("PARSE"),
            failure.path.display(),
            failure.error
        )?;
    }
    if !report.parse_failures.is_empty() {
        writeln!(out)?;
    }

    writeln!(out, "{}", summary_line(report))?;
    Ok(())
}

/// One-line run summary, e.g.
/// `5 snippets: 3 passed, 1 mismatch, 1 timeout (2 informational) in 1.2s`.
pub fn summary_line(report: &RunReport) -> String {
    let s = &report.summary;
    let mut parts = vec![format!("{} passed", s.passed)];
    if s.mismatches > 0 {
        parts.push(format!("{} mismatch", s.mismatches));
    }
    if s.errors > 0 {
        parts.push(format!("{} error", s.errors));
    }
    if s.timeouts > 0 {
        parts.push(format!("{} timeout", s.timeouts));
    }

    let mut line = format!("{} snippets: {}", s.total, parts.join(", "));
    if s.informational > 0 {
        line.push_str(&format!(" ({} informational)", s.informational));
    }
    if s.parse_failures > 0 {
        line.push_str(&format!(", {} document(s) failed to parse", s.parse_failures));
    }
    line.push_str(&format!(" in {}", format_elapsed_ms(report.duration_ms)));
    if s.interrupted {
        line.push_str(" [interrupted]");
    }

    if s.all_passed() {
        color::pass(&line)
    } else {
        color::fail(&line)
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
