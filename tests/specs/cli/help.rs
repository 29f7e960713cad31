// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn kj_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("save")
        .stdout_has("apply")
        .stdout_has("preview");
}

#[test]
fn kj_save_help_lists_block_kinds() {
    cli()
        .args(&["save", "--help"])
        .passes()
        .stdout_has("kubernetes-job")
        .stdout_has("docker-container")
        .stdout_has("process");
}

#[test]
fn kj_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn kj_without_command_is_a_usage_error() {
    cli().fails().code(2).stderr_has("Usage:");
}
