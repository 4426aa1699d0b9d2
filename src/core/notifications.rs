//! Transient player-facing messages.

use super::constants::NOTIFICATION_TTL_MS;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: u64,
    pub expires_at_ms: u64,
}

/// Notifications in arrival order. Each one lives for `ttl_ms` unless it is
/// dismissed first.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_id: u64,
    ttl_ms: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL_MS)
    }
}

impl NotificationQueue {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            ttl_ms,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: u64) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Notification {
            id,
            message: message.into(),
            kind,
            created_at_ms: now_ms,
            expires_at_ms: now_ms + self.ttl_ms,
        });
        id
    }

    /// Removes a notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.entries.retain(|n| n.id != id);
    }

    /// Drops every notification whose lifetime has ended. Returns how many
    /// were removed.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at_ms > now_ms);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let a = queue.notify("one", NotificationKind::Info, 0);
        let b = queue.notify("two", NotificationKind::Success, 0);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().unwrap().message, "two");
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = NotificationQueue::default();
        let id = queue.notify("bye", NotificationKind::Error, 0);
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expiry_after_ttl() {
        let mut queue = NotificationQueue::new(5000);
        queue.notify("first", NotificationKind::Info, 0);
        queue.notify("second", NotificationKind::Info, 2000);

        assert_eq!(queue.expire(4999), 0);
        assert_eq!(queue.expire(5000), 1);
        assert_eq!(queue.iter().next().unwrap().message, "second");
        assert_eq!(queue.expire(7000), 1);
        assert!(queue.is_empty());
    }
}
