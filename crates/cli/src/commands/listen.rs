// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime listen` - consume completed-execution events from stdin.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use chime_core::{ExecutionEvent, Platform};

use crate::session::{build_ctx, on_event};

#[derive(Args)]
pub struct ListenArgs {
    /// Override the platform tag used for playback dispatch
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Override the success sound file
    #[arg(long)]
    pub sound: Option<PathBuf>,
}

/// Read newline-delimited JSON events until stdin closes. Each event is
/// handled on its own task: completions from different terminals may
/// overlap, and a slow playback must not delay later events.
pub async fn listen(args: ListenArgs) -> Result<()> {
    let ctx = Arc::new(build_ctx(args.platform, args.sound));
    tracing::info!(
        platform = %ctx.platform,
        sound = %ctx.sound_path.display(),
        "listening for completed executions"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut handlers = JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ExecutionEvent>(&line) {
            Ok(event) => {
                let ctx = Arc::clone(&ctx);
                handlers.spawn(async move {
                    on_event(event, &ctx).await;
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed event line, skipping");
            }
        }
    }

    // Let in-flight playback attempts finish before exiting.
    while handlers.join_next().await.is_some() {}
    Ok(())
}
