// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime hook` - handle one completed execution per invocation.
//!
//! For shells whose integration runs a command after every prompt
//! instead of feeding a long-lived stream. Note the exit-code hint can
//! recur across invocations here: the hint flag is process-lifetime and
//! each hook call is its own process.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use chime_core::{ExecutionEvent, Platform};

use crate::session::{build_ctx, on_event};

#[derive(Args)]
pub struct HookArgs {
    /// Full command line of the completed execution
    #[arg(long)]
    pub command: String,

    /// Exit code reported by the shell; omit when unknown
    #[arg(long = "exit-code", allow_hyphen_values = true)]
    pub exit_code: Option<i32>,

    /// Override the platform tag used for playback dispatch
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Override the success sound file
    #[arg(long)]
    pub sound: Option<PathBuf>,
}

pub async fn hook(args: HookArgs) -> Result<()> {
    let ctx = build_ctx(args.platform, args.sound);
    on_event(ExecutionEvent::new(args.command, args.exit_code), &ctx).await;
    Ok(())
}
