// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External process runner.
//!
//! The only component that actually spawns anything. Every failure mode
//! (launch failure, non-zero exit, child runtime error) funnels into a
//! `succeeded` boolean plus diagnostic text; nothing propagates as an
//! error to callers.

use async_trait::async_trait;
use std::process::Stdio;

/// Result of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub succeeded: bool,
    /// Error message and trimmed stderr on failure; empty on success.
    pub diagnostic: String,
}

impl RunOutcome {
    pub fn success() -> Self {
        Self { succeeded: true, diagnostic: String::new() }
    }

    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self { succeeded: false, diagnostic: diagnostic.into() }
    }
}

/// Adapter for running a single external command to completion.
#[async_trait]
pub trait ProcessRunner: Clone + Send + Sync + 'static {
    async fn run(&self, command: &str, args: &[String]) -> RunOutcome;
}

/// Real process runner backed by `tokio::process`.
///
/// Commands are spawned as argument arrays, never through a shell, and
/// with any console window hidden on Windows.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &str, args: &[String]) -> RunOutcome {
        let mut cmd = tokio::process::Command::new(command);
        cmd.args(args).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::piped());

        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        match cmd.output().await {
            Err(e) => RunOutcome::failure(format!("failed to launch {command}: {e}")),
            Ok(output) if output.status.success() => RunOutcome::success(),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                let mut diagnostic = format!("{command} exited with {}", output.status);
                if !stderr.is_empty() {
                    diagnostic.push_str(": ");
                    diagnostic.push_str(stderr);
                }
                RunOutcome::failure(diagnostic)
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{ProcessRunner, RunOutcome};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashSet;
    use std::sync::Arc;

    /// Recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RunCall {
        pub command: String,
        pub args: Vec<String>,
    }

    struct FakeRunnerState {
        calls: Vec<RunCall>,
        failing: HashSet<String>,
    }

    /// Fake process runner for testing. Succeeds by default; commands
    /// registered via [`FakeProcessRunner::fail_command`] report failure.
    #[derive(Clone)]
    pub struct FakeProcessRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl Default for FakeProcessRunner {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeRunnerState {
                    calls: Vec::new(),
                    failing: HashSet::new(),
                })),
            }
        }
    }

    impl FakeProcessRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every invocation of `command` report failure.
        pub fn fail_command(&self, command: &str) {
            self.inner.lock().failing.insert(command.to_string());
        }

        /// Get all recorded invocations, in order.
        pub fn calls(&self) -> Vec<RunCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeProcessRunner {
        async fn run(&self, command: &str, args: &[String]) -> RunOutcome {
            let mut state = self.inner.lock();
            state.calls.push(RunCall { command: command.to_string(), args: args.to_vec() });
            if state.failing.contains(command) {
                RunOutcome::failure(format!("{command} failed (scripted)"))
            } else {
                RunOutcome::success()
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessRunner, RunCall};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
