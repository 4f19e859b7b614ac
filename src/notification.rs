//! Transient user-facing notifications
//!
//! One notification is produced per export attempt. It is shown until its
//! display duration runs out; the GUI drops it after that.

use std::time::{Duration, Instant};

use crate::constants::export::NOTIFICATION_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Success)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Failure)
    }

    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }

    pub fn display_duration() -> Duration {
        Duration::from_millis(NOTIFICATION_DURATION_MS)
    }

    /// Time left before the notification should be dismissed
    pub fn remaining_at(&self, now: Instant) -> Duration {
        Self::display_duration().saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert!(!Notification::success("ok").is_failure());
        assert!(Notification::failure("nope").is_failure());
    }

    #[test]
    fn test_fresh_notification_not_expired() {
        let notification = Notification::success("Saved");
        assert!(!notification.is_expired_at(notification.shown_at));
        assert_eq!(notification.remaining_at(notification.shown_at), Duration::from_millis(5000));
    }

    #[test]
    fn test_expires_after_five_seconds() {
        let notification = Notification::failure("Failed");
        let start = notification.shown_at;

        assert!(!notification.is_expired_at(start + Duration::from_millis(4999)));
        assert!(notification.is_expired_at(start + Duration::from_millis(5000)));
        assert!(notification.is_expired_at(start + Duration::from_secs(60)));
    }
}
