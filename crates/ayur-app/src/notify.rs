//! Transient user-facing messages.

use std::collections::VecDeque;
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

/// Most recent notifications kept; older ones are dropped.
pub const HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Timestamp,
}

/// Keeps the last [`HISTORY_LIMIT`] messages; only the latest one is
/// visible, and only until its time-to-live runs out.
#[derive(Debug, Clone)]
pub struct Notifier {
    ttl: SignedDuration,
    history: VecDeque<Notification>,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: SignedDuration::try_from(ttl).unwrap_or(SignedDuration::MAX),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Timestamp::now());
    }

    pub fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Timestamp) {
        let message = message.into();
        match kind {
            NotificationKind::Error | NotificationKind::Warning => {
                tracing::warn!(?kind, %message, "notification");
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(?kind, %message, "notification");
            }
        }
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(Notification {
            kind,
            message,
            shown_at: now,
        });
    }

    /// The visible message at `now`, if any.
    pub fn current(&self, now: Timestamp) -> Option<&Notification> {
        self.history
            .back()
            .filter(|n| now.duration_since(n.shown_at) < self.ttl)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.history.back()
    }

    /// Oldest first.
    pub fn history(&self) -> &VecDeque<Notification> {
        &self.history
    }
}
