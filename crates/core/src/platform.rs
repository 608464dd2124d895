// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform tag for playback dispatch.
//!
//! A closed variant rather than raw `cfg` branching so the dispatcher's
//! fallback chains can be exercised under any tag, independent of the
//! operating system the tests run on.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    /// Anything without a known playback mechanism.
    Other,
}

impl Platform {
    /// Tag for the operating system this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown platform: {other} (expected macos, linux, windows, or other)")),
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
