// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-adapters: the outside-world half of push-chime.
//!
//! Child-process execution, platform sound playback, desktop
//! notifications, and sound-asset resolution. Each boundary is a trait
//! with a fake implementation (behind `test-support`) so the
//! orchestration layer can be tested without spawning anything.

pub mod asset;
pub mod notify;
pub mod playback;
pub mod process;

pub use asset::{resolve_sound_path, sound_exists};
pub use notify::{DesktopNotifyAdapter, NotifyError, UserNotifier};
pub use playback::{Attempt, PlaybackOutcome, SoundPlayer};
pub use process::{ProcessRunner, RunOutcome, TokioProcessRunner};

#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessRunner, RunCall};
