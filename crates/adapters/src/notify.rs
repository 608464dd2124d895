// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing notification adapter.
//!
//! Two surfaces only: a transient status flash on playback success, and
//! the one-time informational hint when shell integration cannot supply
//! an exit code. Playback failures are never surfaced here.

use async_trait::async_trait;
use thiserror::Error;

/// How long the transient success status stays on screen.
const STATUS_TIMEOUT_MS: u32 = 2000;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for surfacing messages to the user.
#[async_trait]
pub trait UserNotifier: Clone + Send + Sync + 'static {
    /// Informational message the user should read once.
    async fn info(&self, message: &str) -> Result<(), NotifyError>;

    /// Transient, auto-dismissing status flash.
    async fn status(&self, message: &str) -> Result<(), NotifyError>;
}

/// Desktop notification adapter using notify-rust.
///
/// On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings)
/// to send notifications via the Notification Center. The first
/// notification triggers `ensure_application_set()` which runs an
/// AppleScript to look up a bundle identifier; in a headless hook
/// context without Automation permissions that AppleScript blocks
/// forever. We pre-set the bundle identifier at construction time to
/// bypass the lookup entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so
            // mac-notification-sys skips its NSAppleScript lookup.
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }

    fn send(message: String, timeout: Option<u32>) {
        // notify_rust::Notification::show() is synchronous on macOS.
        // Fire-and-forget on tokio's bounded blocking thread pool to
        // avoid blocking the async runtime.
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification.summary("Push Chime").body(&message);
            if let Some(ms) = timeout {
                notification.timeout(notify_rust::Timeout::Milliseconds(ms));
            }
            match notification.show() {
                Ok(_) => tracing::debug!(%message, "desktop notification sent"),
                Err(e) => tracing::warn!(%message, error = %e, "desktop notification failed"),
            }
        });
    }
}

#[async_trait]
impl UserNotifier for DesktopNotifyAdapter {
    async fn info(&self, message: &str) -> Result<(), NotifyError> {
        Self::send(message.to_string(), None);
        Ok(())
    }

    async fn status(&self, message: &str) -> Result<(), NotifyError> {
        Self::send(message.to_string(), Some(STATUS_TIMEOUT_MS));
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{NotifyError, UserNotifier};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotifyCall {
        Info(String),
        Status(String),
    }

    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
    }

    /// Fake notification adapter for testing
    #[derive(Clone)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl Default for FakeNotifyAdapter {
        fn default() -> Self {
            Self { inner: Arc::new(Mutex::new(FakeNotifyState { calls: Vec::new() })) }
        }
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl UserNotifier for FakeNotifyAdapter {
        async fn info(&self, message: &str) -> Result<(), NotifyError> {
            self.inner.lock().calls.push(NotifyCall::Info(message.to_string()));
            Ok(())
        }

        async fn status(&self, message: &str) -> Result<(), NotifyError> {
            self.inner.lock().calls.push(NotifyCall::Status(message.to_string()));
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
