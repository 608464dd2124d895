// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pushchime - plays a success sound when a `git push` completes.
//!
//! The binary is the event bridge: `listen` consumes completed-execution
//! events as JSON lines on stdin (piped from the terminal's shell
//! integration), `hook` handles a single event per invocation. The
//! decision logic lives in `chime-core`, effects in `chime-adapters`.

mod commands;
mod exit_error;
mod session;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::classify::ClassifyArgs;
use commands::hook::HookArgs;
use commands::listen::ListenArgs;
use commands::play::PlayArgs;
use exit_error::ExitError;

#[derive(Parser)]
#[command(name = "pushchime", version, about = "Plays a success sound when a git push completes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Listen for completed-execution events as JSON lines on stdin
    Listen(ListenArgs),
    /// Handle one completed execution (shell hook entry point)
    Hook(HookArgs),
    /// Play the success sound now (troubleshooting)
    Play(PlayArgs),
    /// Check whether a command line counts as a push invocation
    Classify(ClassifyArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Listen(args) => commands::listen::listen(args).await,
        Command::Hook(args) => commands::hook::hook(args).await,
        Command::Play(args) => commands::play::play(args).await,
        Command::Classify(args) => commands::classify::classify(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                ExitCode::from(u8::try_from(exit.code).unwrap_or(1))
            }
            None => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Diagnostics go to stderr; `PUSHCHIME_LOG` tunes the filter.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("PUSHCHIME_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
