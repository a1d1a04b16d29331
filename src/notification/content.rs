//! Notification content construction.

use crate::config::TimerConfig;

/// Title of the timeout notification.
pub const TIMEOUT_TITLE: &str = "Time out";

/// Content of a desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    /// Summary line
    pub title: String,
    /// Body text
    pub message: String,
}

impl NotificationContent {
    /// Creates new notification content.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Builds the notification shown when the countdown reaches zero.
///
/// The message names the full interval in the configured display format,
/// e.g. `"25:00 have passed"`.
#[must_use]
pub fn create_timeout_content(config: &TimerConfig) -> NotificationContent {
    NotificationContent::new(
        TIMEOUT_TITLE,
        format!("{} have passed", config.format(config.interval())),
    )
}
