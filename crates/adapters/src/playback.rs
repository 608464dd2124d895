// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sound playback dispatcher.
//!
//! Maps a platform tag to an ordered chain of external playback
//! mechanisms and tries them in sequence, stopping at the first success.
//! Windows is special-cased: the primary mechanism is a PowerShell
//! script driving winmm's `mciSendString`, with a console beep as a
//! best-effort fallback that never changes the reported result.

use std::path::Path;

use chime_core::Platform;

use crate::process::ProcessRunner;

/// One playback mechanism tried by the dispatcher, with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub command: String,
    pub args: Vec<String>,
    pub succeeded: bool,
    pub diagnostic: String,
}

/// Ordered record of a dispatch: which mechanisms ran and whether any
/// primary one succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackOutcome {
    pub succeeded: bool,
    pub attempts: Vec<Attempt>,
}

/// Playback mechanism: an external command plus its argument array.
type Mechanism = (String, Vec<String>);

/// Dispatches sound playback to platform audio utilities.
pub struct SoundPlayer<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> SoundPlayer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Try the platform's mechanisms in order. The caller has already
    /// checked that `asset` exists.
    pub async fn play(&self, asset: &Path, platform: Platform) -> PlaybackOutcome {
        match platform {
            Platform::MacOs | Platform::Linux => {
                self.play_chain(fallback_chain(platform, asset)).await
            }
            Platform::Windows => self.play_windows(asset).await,
            Platform::Other => {
                tracing::warn!(platform = %platform, "no playback mechanism for platform");
                PlaybackOutcome::default()
            }
        }
    }

    async fn play_chain(&self, chain: Vec<Mechanism>) -> PlaybackOutcome {
        let mut outcome = PlaybackOutcome::default();
        for (command, args) in chain {
            if self.attempt(&command, args, &mut outcome).await {
                outcome.succeeded = true;
                break;
            }
        }
        outcome
    }

    /// Windows: mciSendString plays the file synchronously, no message
    /// pump needed. On failure, beep as a last resort — the beep's own
    /// result is recorded but never changes `succeeded`.
    async fn play_windows(&self, asset: &Path) -> PlaybackOutcome {
        let mut outcome = PlaybackOutcome::default();
        let (command, args) = powershell_command(mci_script(asset));
        if self.attempt(&command, args, &mut outcome).await {
            outcome.succeeded = true;
            return outcome;
        }
        tracing::warn!("mciSendString playback failed, falling back to beep");
        let (command, args) = powershell_command("[console]::Beep(1000, 300)".to_string());
        let _ = self.attempt(&command, args, &mut outcome).await;
        outcome
    }

    async fn attempt(
        &self,
        command: &str,
        args: Vec<String>,
        outcome: &mut PlaybackOutcome,
    ) -> bool {
        let result = self.runner.run(command, &args).await;
        if result.succeeded {
            tracing::debug!(command, "playback mechanism succeeded");
        } else {
            tracing::warn!(command, diagnostic = %result.diagnostic, "playback mechanism failed");
        }
        let succeeded = result.succeeded;
        outcome.attempts.push(Attempt {
            command: command.to_string(),
            args,
            succeeded,
            diagnostic: result.diagnostic,
        });
        succeeded
    }
}

/// Ordered mechanism list for platforms with plain utility players.
fn fallback_chain(platform: Platform, asset: &Path) -> Vec<Mechanism> {
    let asset = asset.to_string_lossy().into_owned();
    match platform {
        Platform::MacOs => vec![("afplay".to_string(), vec![asset])],
        Platform::Linux => vec![
            ("canberra-gtk-play".to_string(), vec!["-f".to_string(), asset.clone()]),
            ("paplay".to_string(), vec![asset]),
        ],
        Platform::Windows | Platform::Other => Vec::new(),
    }
}

fn powershell_command(script: String) -> Mechanism {
    (
        "powershell".to_string(),
        vec![
            "-NoProfile".to_string(),
            "-NonInteractive".to_string(),
            "-Command".to_string(),
            script,
        ],
    )
}

/// PowerShell script binding winmm's `mciSendString` and issuing
/// open / play-and-wait / close against the asset under an alias.
fn mci_script(asset: &Path) -> String {
    // MCI command strings: backslashes doubled, embedded quotes escaped.
    let escaped = asset.to_string_lossy().replace('\\', "\\\\").replace('"', "\\\"");
    [
        "Add-Type -TypeDefinition @'",
        "using System;",
        "using System.Runtime.InteropServices;",
        "using System.Text;",
        "public class WinMM {",
        "    [DllImport(\"winmm.dll\", CharSet=CharSet.Auto)]",
        "    public static extern int mciSendString(string cmd, StringBuilder ret, int retLen, IntPtr hwnd);",
        "}",
        "'@",
        &format!("[WinMM]::mciSendString('open \"{escaped}\" type mpegvideo alias snd', $null, 0, [IntPtr]::Zero)"),
        "[WinMM]::mciSendString('play snd wait', $null, 0, [IntPtr]::Zero)",
        "[WinMM]::mciSendString('close snd', $null, 0, [IntPtr]::Zero)",
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "playback_tests.rs"]
mod tests;
