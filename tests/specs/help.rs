// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_subcommands() {
    pushchime()
        .args(&["--help"])
        .run()
        .passes()
        .stdout_has("Usage:")
        .stdout_has("listen")
        .stdout_has("hook")
        .stdout_has("play")
        .stdout_has("classify");
}

#[test]
fn version_shows_version() {
    pushchime().args(&["--version"]).run().passes().stdout_has("0.1");
}

#[test]
fn hook_help_shows_flags() {
    pushchime()
        .args(&["hook", "--help"])
        .run()
        .passes()
        .stdout_has("--command")
        .stdout_has("--exit-code");
}
