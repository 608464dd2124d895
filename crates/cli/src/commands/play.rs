// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime play` - trigger playback directly for troubleshooting.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use chime_adapters::{resolve_sound_path, sound_exists, SoundPlayer, TokioProcessRunner};
use chime_core::Platform;

use crate::exit_error::ExitError;

#[derive(Args)]
pub struct PlayArgs {
    /// Override the platform tag used for playback dispatch
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Override the success sound file
    #[arg(long)]
    pub sound: Option<PathBuf>,
}

pub async fn play(args: PlayArgs) -> Result<()> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let sound_path = args.sound.unwrap_or_else(resolve_sound_path);

    if !sound_exists(&sound_path) {
        return Err(
            ExitError::new(1, format!("sound file missing: {}", sound_path.display())).into()
        );
    }

    let player = SoundPlayer::new(TokioProcessRunner::new());
    let outcome = player.play(&sound_path, platform).await;

    for attempt in &outcome.attempts {
        let verdict = if attempt.succeeded { "ok" } else { "failed" };
        println!("{} {}: {}", verdict, attempt.command, attempt.args.join(" "));
        if !attempt.diagnostic.is_empty() {
            println!("  {}", attempt.diagnostic);
        }
    }

    if outcome.succeeded {
        println!("playback succeeded");
        Ok(())
    } else {
        Err(ExitError::new(1, "no playback mechanism succeeded").into())
    }
}
