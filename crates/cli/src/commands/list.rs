// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sv list` — show the catalog without running anything.

use crate::color;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use sv_catalog::{load_catalog, Catalog};
use sv_core::Snippet;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Documents or directories to list (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn run(args: ListArgs) -> anyhow::Result<i32> {
    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };
    let catalog = load_catalog(&paths).map_err(|e| ExitError::config(e.to_string()))?;

    crate::output::format_or_json(args.output, &catalog, || {
        render_catalog(&catalog, &mut std::io::stdout())
    })?;
    Ok(if catalog.failures.is_empty() { 0 } else { 1 })
}

/// Text listing: documents, their heading groups, and each snippet's role.
pub fn render_catalog(catalog: &Catalog, out: &mut dyn Write) -> anyhow::Result<()> {
    for doc in &catalog.documents {
        let note = format!("({} snippets, {})", doc.snippets.len(), doc.short_hash());
        writeln!(
            out,
            "{} {}",
            color::header(&doc.path.display().to_string()),
            color::muted(&note)
        )?;
        for (heading, snippets) in doc.by_heading() {
            let label = if heading.is_empty() {
                "(top level)".to_string()
            } else {
                heading
            };
            writeln!(out, "  {}", label)?;
            for snippet in snippets {
                writeln!(
                    out,
                    "    #{} {} [{}]",
                    snippet.id.ordinal,
                    snippet.lang,
                    role(snippet)
                )?;
            }
        }
    }

    for failure in &catalog.failures {
        writeln!(
            out,
            "{} {}: {}",
            color::fail("PARSE"),
            failure.path.display(),
            failure.error
        )?;
    }
    Ok(())
}

fn role(snippet: &Snippet) -> &'static str {
    if !snippet.capture {
        "no-capture"
    } else if snippet.expected.is_some() {
        "checked"
    } else {
        "informational"
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
