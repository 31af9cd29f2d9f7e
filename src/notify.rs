//! Transient self-clearing notifications.
//!
//! A [`Notifier`] holds at most one message. Showing a message records the
//! time; [`Notifier::tick`] clears it once the dwell has elapsed. The event
//! loop calls `tick` on every frame, so expiry is only ever observed by the
//! view that owns the notifier. Dropping the view drops the notifier and
//! with it any pending expiry.

use std::time::{Duration, Instant};

use crate::constants::NOTIFICATION_DWELL;

/// Where a notification is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    /// Floating snackbar in the design gallery
    Snackbar,
    /// Banner above the layouts view
    Alert,
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Action completed
    Success,
    /// Action failed
    Error,
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Severity
    pub kind: NotificationKind,
    /// When the message was shown
    pub shown_at: Instant,
}

/// Single-slot notification holder with a fixed dwell.
#[derive(Debug, Clone)]
pub struct Notifier {
    channel: NotificationChannel,
    dwell: Duration,
    current: Option<Notification>,
}

impl Notifier {
    /// Creates an empty notifier with the default 3 second dwell.
    #[must_use]
    pub const fn new(channel: NotificationChannel) -> Self {
        Self::with_dwell(channel, NOTIFICATION_DWELL)
    }

    /// Creates an empty notifier with a custom dwell.
    #[must_use]
    pub const fn with_dwell(channel: NotificationChannel, dwell: Duration) -> Self {
        Self {
            channel,
            dwell,
            current: None,
        }
    }

    /// Display channel.
    #[must_use]
    pub const fn channel(&self) -> NotificationChannel {
        self.channel
    }

    /// Shows a message, replacing any current one and restarting the dwell.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Shows a success message.
    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Success, now);
    }

    /// Shows an error message.
    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Error, now);
    }

    /// Current notification, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns true while a message is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the message if its dwell has elapsed at `now`.
    ///
    /// Returns true if a message was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.dwell);
        if expired {
            self.current = None;
        }
        expired
    }

    /// Clears the message immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
