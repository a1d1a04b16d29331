//! Desktop notifications.
//!
//! The timer engine calls into a `Notifier` exactly once per natural timeout.
//!
//! - `DesktopNotifier`: real notifications through `notify-rust`
//! - `MockNotifier`: records notifications, for tests
//!
//! # Example
//!
//! ```rust,ignore
//! use traytimer::notification::{DesktopNotifier, Notifier};
//!
//! DesktopNotifier::new().notify("Time out", "25:00 have passed")?;
//! ```

mod content;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub use self::content::{create_timeout_content, NotificationContent, TIMEOUT_TITLE};
pub use self::error::NotificationError;

// ============================================================================
// Notifier
// ============================================================================

/// Sink for desktop notifications.
pub trait Notifier: Send + 'static {
    /// Shows a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

impl<T: Notifier + Sync> Notifier for Arc<T> {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        (**self).notify(title, message)
    }
}

// ============================================================================
// DesktopNotifier
// ============================================================================

/// Sends notifications through the platform notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Creates a new DesktopNotifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        notify_rust::Notification::new()
            .summary(title)
            .body(message)
            .show()
            .map(|_| ())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Records notifications instead of showing them.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<NotificationContent>>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `notify` call fail (or succeed again).
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn get_notifications(&self) -> Vec<NotificationContent> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.lock().map(|n| n.len()).unwrap_or(0)
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(NotificationContent::new(title, message));
        }
        Ok(())
    }
}
