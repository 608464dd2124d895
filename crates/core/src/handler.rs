// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure event handler: classify, gate, decide.
//!
//! The event bridge calls [`handle`] once per completed execution and
//! performs whatever effect the returned [`Action`] names. Keeping the
//! decision pure means the whole pipeline is testable without a live
//! terminal or a real child process.

use crate::classify::is_push_command;
use crate::event::ExecutionEvent;
use crate::gate::{should_play, Decision, HintState};

/// Effect the caller should perform for one completed execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Not a push command. Nothing to do.
    Ignore,
    /// Push command skipped: non-zero exit code, or exit code still
    /// unavailable after the hint was already shown. Log only.
    LogSkip { exit_code: Option<i32> },
    /// Push command with no exit code: log the skip and show the
    /// one-time shell-integration hint.
    LogSkipWithHint,
    /// Push succeeded: attempt sound playback.
    AttemptPlayback,
}

/// Decide what to do with one completed execution.
///
/// Mutates `hint` (the one-way shown flag) only when returning
/// [`Action::LogSkipWithHint`].
pub fn handle(event: &ExecutionEvent, hint: &HintState) -> Action {
    if !is_push_command(&event.command_line) {
        return Action::Ignore;
    }
    match should_play(event.exit_code, hint) {
        Decision::Proceed => Action::AttemptPlayback,
        Decision::SkipWithHint => Action::LogSkipWithHint,
        Decision::SkipSilently => Action::LogSkip { exit_code: event.exit_code },
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
