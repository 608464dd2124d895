// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime listen` specs
//!
//! Events are piped as JSON lines on stdin; the process exits when
//! stdin closes. Playback is steered to the unsupported platform tag so
//! no audio utility runs on the test host.

use crate::prelude::*;

#[test]
fn exits_cleanly_when_stdin_closes() {
    pushchime()
        .args(&["listen", "--platform", "other"])
        .stdin("")
        .run()
        .passes()
        .stderr_has("listening for completed executions");
}

#[test]
fn successful_push_with_missing_sound_logs_skip() {
    pushchime()
        .args(&["listen", "--platform", "other", "--sound", "/nonexistent/success.mp3"])
        .stdin("{\"command_line\": \"git push\", \"exit_code\": 0}\n")
        .run()
        .passes()
        .stderr_has("detected successful push")
        .stderr_has("sound file missing");
}

#[test]
fn malformed_lines_are_skipped_and_the_stream_continues() {
    let dir = tempfile::tempdir().unwrap();
    let sound = dir.path().join("success.mp3");
    std::fs::write(&sound, b"mp3").unwrap();
    let sound = sound.to_string_lossy().into_owned();
    pushchime()
        .args(&["listen", "--platform", "other", "--sound", &sound])
        .stdin("this is not json\n{\"command_line\": \"git push\", \"exit_code\": 0}\n")
        .run()
        .passes()
        .stderr_has("malformed event line")
        .stderr_has("no playback mechanism");
}

#[test]
fn non_push_events_produce_no_noise() {
    pushchime()
        .args(&["listen", "--platform", "other"])
        .stdin("{\"command_line\": \"cargo test\", \"exit_code\": 0}\n")
        .run()
        .passes();
}

#[test]
fn failed_push_skips_without_playback_logs() {
    let run = pushchime()
        .args(&["listen", "--platform", "other"])
        .stdin("{\"command_line\": \"git push\", \"exit_code\": 1}\n")
        .run()
        .passes();
    assert!(!run.stderr.contains("no playback mechanism"), "stderr: {}", run.stderr);
}
