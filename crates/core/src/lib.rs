// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-core: pure decision logic for the push-chime notifier.
//!
//! Everything in this crate is host-agnostic and I/O-free: the event
//! bridge feeds [`ExecutionEvent`]s to [`handle`], which decides what
//! the effectful shell should do. Process spawning, playback, and user
//! notification live in `chime-adapters`.

pub mod classify;
pub mod event;
pub mod gate;
pub mod handler;
pub mod platform;

pub use classify::is_push_command;
pub use event::ExecutionEvent;
pub use gate::{should_play, Decision, HintState};
pub use handler::{handle, Action};
pub use platform::Platform;
