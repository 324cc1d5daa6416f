// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv: verify labeled code snippets against their expected output

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use exit_error::ExitError;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(
    name = "sv",
    version = VERSION,
    about = "Verify labeled code snippets against their expected output",
    styles = color::styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run snippets and compare captured output
    Check(commands::check::CheckArgs),
    /// Show the snippet catalog without running anything
    List(commands::list::ListArgs),
}

/// Log filter comes from `SV_LOG` (tracing env-filter syntax); logs go to
/// stderr so report output on stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("SV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => commands::check::run(args).await,
        Command::List(args) => commands::list::run(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if let Some(exit) = e.downcast_ref::<ExitError>() {
                eprintln!("sv: {}", exit.message);
                std::process::exit(exit.code);
            }
            eprintln!("sv: {e:#}");
            std::process::exit(2);
        }
    }
}
