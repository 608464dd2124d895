// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-event orchestration: classify, gate, play, report.
//!
//! [`on_event`] performs the effect chosen by `chime_core::handle`.
//! Nothing here returns an error: a push notification that cannot be
//! played must never disturb the terminal session, so every failure
//! ends as a log line.

use std::path::PathBuf;

use chime_adapters::{
    resolve_sound_path, sound_exists, DesktopNotifyAdapter, ProcessRunner, SoundPlayer,
    TokioProcessRunner, UserNotifier,
};
use chime_core::{handle, Action, ExecutionEvent, HintState, Platform};

/// One-time hint shown when shell integration cannot report exit codes.
pub(crate) const HINT_MESSAGE: &str =
    "Shell integration did not provide an exit code, so the push sound was skipped.";

/// Transient status flashed after a successful playback.
pub(crate) const SUCCESS_MESSAGE: &str = "Git push succeeded";

/// Everything a handler invocation needs. One context per process;
/// `hint` is the only mutable piece and is shared across concurrent
/// handler tasks.
pub(crate) struct SessionCtx<R: ProcessRunner, N: UserNotifier> {
    pub hint: HintState,
    pub player: SoundPlayer<R>,
    pub notifier: N,
    pub platform: Platform,
    pub sound_path: PathBuf,
}

/// Production context with real process spawning and desktop
/// notifications.
pub(crate) fn build_ctx(
    platform: Option<Platform>,
    sound: Option<PathBuf>,
) -> SessionCtx<TokioProcessRunner, DesktopNotifyAdapter> {
    SessionCtx {
        hint: HintState::new(),
        player: SoundPlayer::new(TokioProcessRunner::new()),
        notifier: DesktopNotifyAdapter::new(),
        platform: platform.unwrap_or_else(Platform::current),
        sound_path: sound.unwrap_or_else(resolve_sound_path),
    }
}

/// Handle one completed terminal execution.
pub(crate) async fn on_event<R: ProcessRunner, N: UserNotifier>(
    event: ExecutionEvent,
    ctx: &SessionCtx<R, N>,
) {
    let command = event.command_line.trim();
    match handle(&event, &ctx.hint) {
        Action::Ignore => {
            tracing::trace!(command, "not a push command");
        }
        Action::LogSkip { exit_code } => match exit_code {
            Some(code) => {
                tracing::debug!(command, exit_code = code, "push failed, skipping sound");
            }
            None => {
                tracing::debug!(command, "exit code unavailable, skipping sound");
            }
        },
        Action::LogSkipWithHint => {
            tracing::info!(command, "exit code unavailable, skipping sound");
            if let Err(e) = ctx.notifier.info(HINT_MESSAGE).await {
                tracing::warn!(error = %e, "could not show exit-code hint");
            }
        }
        Action::AttemptPlayback => {
            tracing::info!(command, "detected successful push");
            if !sound_exists(&ctx.sound_path) {
                // Packaging defect, not a user error.
                tracing::warn!(
                    path = %ctx.sound_path.display(),
                    "sound file missing, skipping playback"
                );
                return;
            }
            let outcome = ctx.player.play(&ctx.sound_path, ctx.platform).await;
            if outcome.succeeded {
                tracing::info!("success sound played");
                if let Err(e) = ctx.notifier.status(SUCCESS_MESSAGE).await {
                    tracing::warn!(error = %e, "could not show success status");
                }
            } else {
                tracing::info!("no playback mechanism succeeded");
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
