//! Transient notifications.
//!
//! A notification stays active until it is dismissed or its lifetime runs
//! out. Expiry is evaluated against an explicit `now` so callers (and tests)
//! control the clock.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::api;

/// Title used when a search fails.
pub const SEARCH_FAILED_TITLE: &str = "Error fetching articles";

/// Title used when the metadata lookup fails.
pub const ENRICHMENT_FAILED_TITLE: &str = "Error fetching additional information";

/// One failure notification.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// Identifier used for dismissal.
    pub id: u64,

    /// Short headline.
    pub title: String,

    /// Message text of the failure.
    pub description: String,

    #[serde(skip)]
    created_at: Instant,

    #[serde(skip)]
    duration: Duration,
}

impl Notification {
    /// Check if the notification has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Queue of active notifications, oldest first.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    duration: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(api::NOTIFICATION_DURATION)
    }
}

impl NotificationCenter {
    /// Create a center whose notifications live for `duration`.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { items: Vec::new(), next_id: 0, duration }
    }

    /// Add a notification created now.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push_at(title, description, Instant::now())
    }

    /// Add a notification created at `now`.
    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            title: title.into(),
            description: description.into(),
            created_at: now,
            duration: self.duration,
        });
        id
    }

    /// Remove a notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop expired notifications. Returns how many were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    /// The most recent notification still active at `now`.
    #[must_use]
    pub fn newest_active(&self, now: Instant) -> Option<&Notification> {
        self.items.iter().rev().find(|n| !n.is_expired(now))
    }

    /// Notifications still active at `now`.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    /// All stored notifications, including expired ones not yet pruned.
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
