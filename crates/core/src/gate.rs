// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-status gate: decides whether a confirmed push gets a sound.

use parking_lot::Mutex;
use std::sync::Arc;

/// What to do with a push command once its exit status is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Exit code was zero: play the sound.
    Proceed,
    /// Push failed or the hint was already shown: skip, log only.
    SkipSilently,
    /// Exit code unavailable for the first time: skip and tell the user
    /// once that shell integration did not report an exit code.
    SkipWithHint,
}

/// Process-lifetime flag tracking whether the exit-code-unavailable hint
/// has been shown. Cloned handles share the flag; it transitions
/// false -> true at most once and never resets.
///
/// Concurrent handlers racing on the first absent exit code may both win
/// `mark_shown` under a lost-update interleaving; a doubled hint is
/// tolerated.
#[derive(Clone, Default)]
pub struct HintState {
    shown: Arc<Mutex<bool>>,
}

impl HintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the hint shown. Returns true only for the call that performed
    /// the transition.
    fn mark_shown(&self) -> bool {
        let mut shown = self.shown.lock();
        if *shown {
            false
        } else {
            *shown = true;
            true
        }
    }

    pub fn shown(&self) -> bool {
        *self.shown.lock()
    }
}

/// Gate a confirmed push command on its exit status.
///
/// Absent exit code yields [`Decision::SkipWithHint`] the first time
/// (marking the hint shown as a side effect) and
/// [`Decision::SkipSilently`] thereafter. Non-zero skips silently; zero
/// proceeds.
pub fn should_play(exit_code: Option<i32>, hint: &HintState) -> Decision {
    match exit_code {
        None => {
            if hint.mark_shown() {
                Decision::SkipWithHint
            } else {
                Decision::SkipSilently
            }
        }
        Some(0) => Decision::Proceed,
        Some(_) => Decision::SkipSilently,
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
