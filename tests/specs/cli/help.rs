// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs.

use crate::prelude::*;

#[test]
fn sv_no_args_shows_usage_and_exits_two() {
    cli().exit_code(2).stderr_has("Usage:");
}

#[test]
fn sv_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("check")
        .stdout_has("list");
}

#[test]
fn sv_check_help_shows_flags() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("--jobs")
        .stdout_has("--timeout")
        .stdout_has("--filter")
        .stdout_has("--config")
        .stdout_has("--output");
}

#[test]
fn sv_list_help_shows_usage() {
    cli().args(&["list", "--help"]).passes().stdout_has("Usage:");
}

#[test]
fn sv_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_subcommand_exits_two() {
    cli().args(&["frobnicate"]).exit_code(2).stderr_has("Usage:");
}
