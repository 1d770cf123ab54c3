// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Follow relationship reconciliation.
//!
//! Optimistic follow/unfollow per actor: `Idle -> Pending -> Settled`.
//! The pending phase guards against overlapping confirmations for the
//! same actor, rolls back when a confirmation is rejected, and rolls
//! back when the in-flight future is dropped (the control went away
//! before the confirmation landed).

use std::time::Duration;

use dashmap::DashMap;

use crate::error::{AppError, Result};
use crate::services::ActivityFeed;

/// Phase of the confirmation state machine for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowPhase {
    /// No confirmation has ever run for this actor
    Idle,
    /// A confirmation round-trip is in flight
    Pending,
    /// The last confirmation completed and was applied
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmMode {
    Accept,
    Reject,
}

/// Stand-in for the follow/unfollow network round-trip.
///
/// Sleeps for the configured delay, then reports the outcome.
pub struct FollowReconciler {
    delay: Duration,
    mode: ConfirmMode,
}

impl FollowReconciler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            mode: ConfirmMode::Accept,
        }
    }

    /// Reconciler whose confirmations are always rejected. Exercises
    /// the rollback transition.
    pub fn rejecting(delay: Duration) -> Self {
        Self {
            delay,
            mode: ConfirmMode::Reject,
        }
    }

    async fn confirm(&self, actor_id: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        match self.mode {
            ConfirmMode::Accept => Ok(()),
            ConfirmMode::Reject => Err(AppError::ConfirmationFailed(actor_id.to_string())),
        }
    }
}

/// Tracks confirmation phases per actor and applies settled outcomes to
/// the activity feed.
pub struct FollowTracker {
    phases: DashMap<String, FollowPhase>,
    reconciler: FollowReconciler,
}

impl FollowTracker {
    pub fn new(reconciler: FollowReconciler) -> Self {
        Self {
            phases: DashMap::new(),
            reconciler,
        }
    }

    /// Current phase for an actor. Actors never toggled are `Idle`.
    pub fn phase(&self, actor_id: &str) -> FollowPhase {
        self.phases
            .get(actor_id)
            .map(|p| *p)
            .unwrap_or(FollowPhase::Idle)
    }

    /// Toggle the follow relationship with `actor_id`.
    ///
    /// Reads the current flag, enters `Pending`, awaits the simulated
    /// confirmation, then flips `is_following` on every feed entry for
    /// the actor and settles. A second toggle while one is pending
    /// fails with `FollowPending`; a rejected confirmation rolls the
    /// phase back and fails with `ConfirmationFailed`. Dropping the
    /// returned future also rolls the phase back, so an abandoned
    /// confirmation never leaves the actor stuck in `Pending`.
    pub async fn toggle_follow(&self, feed: &ActivityFeed, actor_id: &str) -> Result<bool> {
        let desired = !feed.is_following(actor_id)?;

        let prior = {
            let mut entry = self
                .phases
                .entry(actor_id.to_string())
                .or_insert(FollowPhase::Idle);
            if *entry == FollowPhase::Pending {
                return Err(AppError::FollowPending(actor_id.to_string()));
            }
            let prior = *entry;
            *entry = FollowPhase::Pending;
            prior
        };

        let guard = PhaseGuard {
            phases: &self.phases,
            actor_id,
            prior,
            armed: true,
        };

        tracing::debug!(actor = %actor_id, desired, "Follow confirmation pending");
        if let Err(e) = self.reconciler.confirm(actor_id).await {
            tracing::warn!(actor = %actor_id, "Follow confirmation rejected, rolling back");
            return Err(e); // guard restores the prior phase
        }

        let changed = feed.set_following(actor_id, desired);
        guard.disarm();
        self.phases
            .insert(actor_id.to_string(), FollowPhase::Settled);

        tracing::info!(
            actor = %actor_id,
            following = desired,
            entries = changed,
            "Follow settled"
        );
        Ok(desired)
    }
}

/// Restores the prior phase unless the confirmation settled.
struct PhaseGuard<'a> {
    phases: &'a DashMap<String, FollowPhase>,
    actor_id: &'a str,
    prior: FollowPhase,
    armed: bool,
}

impl PhaseGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.phases
                .insert(self.actor_id.to_string(), self.prior);
        }
    }
}
