// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed: like toggles and follow flag reconciliation.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{AppError, Result};
use crate::models::ActivityItem;

/// Immutable snapshot of the activity feed.
pub type ActivitySnapshot = Arc<Vec<ActivityItem>>;

/// Feed filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFilter {
    All,
    Following,
}

/// Ordered feed of heterogeneous activity entries.
pub struct ActivityFeed {
    shared: watch::Sender<ActivitySnapshot>,
}

impl ActivityFeed {
    pub fn new(activities: Vec<ActivityItem>) -> Self {
        let (shared, _) = watch::channel(Arc::new(activities));
        Self { shared }
    }

    /// Subscribe to feed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ActivitySnapshot> {
        self.shared.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> ActivitySnapshot {
        self.shared.borrow().clone()
    }

    /// Toggle the like on the entry with `id`.
    ///
    /// Kinds that carry no engagement are left structurally untouched
    /// and report `Ok(false)`; liking a bare follow notification is not
    /// meaningful, so nothing is committed for it.
    pub fn toggle_like(&self, id: &str) -> Result<bool> {
        let mut next: Vec<ActivityItem> = self.snapshot().as_ref().clone();
        let item = next
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("activity {id}")))?;

        let Some(engagement) = item.kind.engagement_mut() else {
            tracing::debug!(activity = %id, "Activity kind has no engagement, ignoring like");
            return Ok(false);
        };

        engagement.is_liked = !engagement.is_liked;
        engagement.likes = if engagement.is_liked {
            engagement.likes + 1
        } else {
            engagement.likes.saturating_sub(1)
        };

        self.shared.send_replace(Arc::new(next));
        Ok(true)
    }

    /// Current follow flag for `actor_id`, read from the first matching
    /// entry.
    pub fn is_following(&self, actor_id: &str) -> Result<bool> {
        self.snapshot()
            .iter()
            .find(|a| a.actor.user.id == actor_id)
            .map(|a| a.actor.is_following)
            .ok_or_else(|| AppError::NotFound(format!("actor {actor_id}")))
    }

    /// Set the follow flag on every entry whose actor matches.
    ///
    /// The same actor may appear in any number of feed entries, so the
    /// flag is reconciled across all of them, not just the one that was
    /// clicked. Returns how many entries changed.
    pub fn set_following(&self, actor_id: &str, following: bool) -> usize {
        let mut next: Vec<ActivityItem> = self.snapshot().as_ref().clone();
        let mut changed = 0;
        for item in next.iter_mut().filter(|a| a.actor.user.id == actor_id) {
            if item.actor.is_following != following {
                item.actor.is_following = following;
                changed += 1;
            }
        }

        if changed > 0 {
            self.shared.send_replace(Arc::new(next));
        }
        tracing::debug!(actor = %actor_id, following, changed, "Follow flag reconciled");
        changed
    }

    /// Feed entries under the given filter tab.
    pub fn filtered(&self, filter: FeedFilter) -> Vec<ActivityItem> {
        self.snapshot()
            .iter()
            .filter(|a| match filter {
                FeedFilter::All => true,
                FeedFilter::Following => a.actor.is_following,
            })
            .cloned()
            .collect()
    }
}
