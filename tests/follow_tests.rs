// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use std::time::Duration;

use jurni_core::error::AppError;
use jurni_core::seed;
use jurni_core::services::{ActivityFeed, FollowPhase, FollowReconciler, FollowTracker};

mod common;

const CONFIRM_DELAY: Duration = Duration::from_millis(300);

fn tracker(reconciler: FollowReconciler) -> (Arc<FollowTracker>, Arc<ActivityFeed>) {
    (
        Arc::new(FollowTracker::new(reconciler)),
        Arc::new(ActivityFeed::new(seed::activities())),
    )
}

#[tokio::test(start_paused = true)]
async fn test_follow_settles_on_every_entry_for_the_actor() {
    // Actor "3" appears twice in this feed
    let mut entries = seed::activities();
    let mut duplicate = entries[2].clone();
    duplicate.id = "5".to_string();
    entries.push(duplicate);

    let feed = ActivityFeed::new(entries);
    let follows = FollowTracker::new(FollowReconciler::new(CONFIRM_DELAY));

    let following = follows.toggle_follow(&feed, "3").await.expect("toggle");
    assert!(following);
    assert_eq!(follows.phase("3"), FollowPhase::Settled);

    let snapshot = feed.snapshot();
    let matching: Vec<_> = snapshot
        .iter()
        .filter(|a| a.actor.user.id == "3")
        .collect();
    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(|a| a.actor.is_following));
}

#[tokio::test(start_paused = true)]
async fn test_toggle_unfollows_after_a_settled_follow() {
    let (follows, feed) = tracker(FollowReconciler::new(CONFIRM_DELAY));

    assert!(follows.toggle_follow(&feed, "3").await.expect("follow"));
    assert!(!follows.toggle_follow(&feed, "3").await.expect("unfollow"));
    assert_eq!(feed.is_following("3").expect("actor"), false);
}

#[tokio::test(start_paused = true)]
async fn test_second_toggle_while_pending_is_rejected() {
    let (follows, feed) = tracker(FollowReconciler::new(CONFIRM_DELAY));

    let in_flight = {
        let follows = follows.clone();
        let feed = feed.clone();
        tokio::spawn(async move { follows.toggle_follow(&feed, "3").await })
    };

    // Let the spawned confirmation reach its pending phase
    tokio::task::yield_now().await;
    assert_eq!(follows.phase("3"), FollowPhase::Pending);

    let second = follows.toggle_follow(&feed, "3").await;
    assert!(matches!(second, Err(AppError::FollowPending(_))));

    // The first confirmation still lands
    let result = in_flight.await.expect("join");
    assert!(result.expect("first toggle"));
    assert!(feed.is_following("3").expect("actor"));
}

#[tokio::test(start_paused = true)]
async fn test_rejected_confirmation_rolls_back() {
    let (follows, feed) = tracker(FollowReconciler::rejecting(CONFIRM_DELAY));

    let result = follows.toggle_follow(&feed, "3").await;
    assert!(matches!(result, Err(AppError::ConfirmationFailed(_))));

    // Nothing was applied and the phase returned to its prior state
    assert!(!feed.is_following("3").expect("actor"));
    assert_eq!(follows.phase("3"), FollowPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_aborted_confirmation_restores_the_prior_phase() {
    let (follows, feed) = tracker(FollowReconciler::new(CONFIRM_DELAY));

    let in_flight = {
        let follows = follows.clone();
        let feed = feed.clone();
        tokio::spawn(async move { follows.toggle_follow(&feed, "3").await })
    };

    tokio::task::yield_now().await;
    assert_eq!(follows.phase("3"), FollowPhase::Pending);

    // The control went away before the confirmation landed
    in_flight.abort();
    assert!(in_flight.await.expect_err("aborted").is_cancelled());

    assert_eq!(follows.phase("3"), FollowPhase::Idle);
    assert!(!feed.is_following("3").expect("actor"));

    // A fresh toggle still works
    assert!(follows.toggle_follow(&feed, "3").await.expect("retry"));
}

#[tokio::test(start_paused = true)]
async fn test_toggle_unknown_actor_is_not_found() {
    let (follows, feed) = tracker(FollowReconciler::new(CONFIRM_DELAY));

    let result = follows.toggle_follow(&feed, "999").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(follows.phase("999"), FollowPhase::Idle);
}
