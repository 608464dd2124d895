// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec harness: builds and runs the pushchime binary, with chained
//! assertions over exit status and captured output.

#![allow(dead_code)]

pub struct Spec {
    cmd: assert_cmd::Command,
}

/// Start a spec invocation of the pushchime binary.
pub fn pushchime() -> Spec {
    #[allow(clippy::unwrap_used)]
    let cmd = assert_cmd::Command::cargo_bin("pushchime").unwrap();
    Spec { cmd }
}

impl Spec {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    #[allow(clippy::unwrap_used)]
    pub fn run(mut self) -> SpecRun {
        let output = self.cmd.output().unwrap();
        SpecRun {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct SpecRun {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl SpecRun {
    #[track_caller]
    pub fn passes(self) -> Self {
        assert!(self.status.success(), "expected success, got {}\nstderr: {}", self.status, self.stderr);
        self
    }

    #[track_caller]
    pub fn fails_with(self, code: i32) -> Self {
        assert_eq!(self.status.code(), Some(code), "stderr: {}", self.stderr);
        self
    }

    #[track_caller]
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    #[track_caller]
    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}
