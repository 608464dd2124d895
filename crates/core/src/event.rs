// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completed-terminal-execution event as reported by the shell integration.

use serde::{Deserialize, Serialize};

/// One completed terminal command, as reported by the host shell
/// integration. `exit_code` is `None` when the integration could not
/// determine the command's exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    pub command_line: String,
    #[serde(default)]
    pub exit_code: Option<i32>,
}

impl ExecutionEvent {
    pub fn new(command_line: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self { command_line: command_line.into(), exit_code }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
