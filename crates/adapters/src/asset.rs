// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sound-asset resolution.
//!
//! The bundled sound ships next to the installed binary. A
//! `PUSHCHIME_SOUND` environment variable overrides the lookup, and a
//! per-user data directory serves as a fallback for installs that
//! cannot write next to the binary. Existence is re-checked before
//! every playback attempt; nothing is cached across events.

use std::path::{Path, PathBuf};

/// File name of the bundled success sound.
pub const SOUND_FILE: &str = "success.mp3";

/// Environment variable overriding the sound file location.
pub const SOUND_ENV: &str = "PUSHCHIME_SOUND";

/// Resolve where the success sound should live.
///
/// Order: explicit `PUSHCHIME_SOUND` override (taken as-is, even if the
/// file is missing, so the miss gets logged against the user's choice),
/// then the file next to the running binary, then
/// `<data dir>/pushchime/success.mp3`. When nothing exists the
/// binary-adjacent path is returned so skip logs name a concrete path.
pub fn resolve_sound_path() -> PathBuf {
    if let Ok(path) = std::env::var(SOUND_ENV) {
        return PathBuf::from(path);
    }
    let exe_adjacent = std::env::current_exe()
        .ok()
        .and_then(|exe| Some(exe.parent()?.join(SOUND_FILE)));
    if let Some(ref path) = exe_adjacent {
        if sound_exists(path) {
            return path.clone();
        }
    }
    if let Some(data) = dirs::data_dir() {
        let candidate = data.join("pushchime").join(SOUND_FILE);
        if sound_exists(&candidate) {
            return candidate;
        }
    }
    exe_adjacent.unwrap_or_else(|| PathBuf::from(SOUND_FILE))
}

/// Whether the resolved asset is present right now.
pub fn sound_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
