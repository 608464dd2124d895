// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pushchime classify` - test the push matcher against a command line.

use anyhow::Result;
use clap::Args;

use chime_core::is_push_command;

use crate::exit_error::ExitError;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Command line to test
    pub command_line: String,
}

/// Prints the verdict; exits 0 for a push invocation, 1 otherwise, so
/// shell scripts can branch on it.
pub fn classify(args: ClassifyArgs) -> Result<()> {
    if is_push_command(&args.command_line) {
        println!("push");
        Ok(())
    } else {
        println!("not-push");
        Err(ExitError::new(1, String::new()).into())
    }
}
