// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime classify` specs

use crate::prelude::*;

#[test]
fn plain_push_classifies() {
    pushchime().args(&["classify", "git push"]).run().passes().stdout_has("push");
}

#[test]
fn quoted_path_qualified_push_classifies() {
    pushchime()
        .args(&["classify", "  &  \"C:\\tools\\git.exe\" push origin main"])
        .run()
        .passes()
        .stdout_has("push");
}

#[test]
fn pull_does_not_classify() {
    pushchime().args(&["classify", "git pull"]).run().fails_with(1).stdout_has("not-push");
}

#[test]
fn embedded_push_does_not_classify() {
    pushchime().args(&["classify", "echo x && git push"]).run().fails_with(1);
}

#[test]
fn pushx_does_not_classify() {
    pushchime().args(&["classify", "git pushx"]).run().fails_with(1);
}
