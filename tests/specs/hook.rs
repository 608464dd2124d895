// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime hook` specs
//!
//! Exercised with an unsupported platform tag or a missing sound file
//! so no real audio utility is spawned on the test host.

use crate::prelude::*;

#[test]
fn failed_push_skips_silently() {
    pushchime()
        .args(&["hook", "--command", "git push", "--exit-code", "1", "--platform", "other"])
        .run()
        .passes();
}

#[test]
fn non_push_command_is_ignored() {
    pushchime()
        .args(&["hook", "--command", "cargo build", "--exit-code", "0", "--platform", "other"])
        .run()
        .passes();
}

#[test]
fn missing_sound_file_is_logged_not_fatal() {
    pushchime()
        .args(&[
            "hook",
            "--command",
            "git push",
            "--exit-code",
            "0",
            "--platform",
            "other",
            "--sound",
            "/nonexistent/pushchime/success.mp3",
        ])
        .run()
        .passes()
        .stderr_has("sound file missing");
}

#[test]
fn unsupported_platform_logs_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let sound = dir.path().join("success.mp3");
    std::fs::write(&sound, b"mp3").unwrap();
    let sound = sound.to_string_lossy().into_owned();
    pushchime()
        .args(&[
            "hook",
            "--command",
            "git push",
            "--exit-code",
            "0",
            "--platform",
            "other",
            "--sound",
            &sound,
        ])
        .run()
        .passes()
        .stderr_has("no playback mechanism");
}

#[test]
fn negative_exit_code_is_accepted() {
    pushchime()
        .args(&["hook", "--command", "git push", "--exit-code", "-1", "--platform", "other"])
        .run()
        .passes();
}
