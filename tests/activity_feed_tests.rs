// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use jurni_core::error::AppError;
use jurni_core::models::{ActivityItem, ActivityKind};
use jurni_core::seed;
use jurni_core::services::{ActivityFeed, FeedFilter};

mod common;
use common::seeded_activities;

fn find<'a>(items: &'a [ActivityItem], id: &str) -> &'a ActivityItem {
    items.iter().find(|a| a.id == id).expect("activity present")
}

#[test]
fn test_toggle_like_on_engagement_kind() {
    // Entry "1" is a shared trip with likes: 24, is_liked: false
    let feed = seeded_activities();

    let changed = feed.toggle_like("1").expect("toggle");
    assert!(changed);

    let snapshot = feed.snapshot();
    let engagement = find(&snapshot, "1").kind.engagement().expect("engagement");
    assert_eq!(engagement.likes, 25);
    assert!(engagement.is_liked);
}

#[test]
fn test_toggle_like_is_an_involution() {
    let feed = seeded_activities();
    let before = serde_json::to_value(feed.snapshot().as_ref()).expect("serialize");

    feed.toggle_like("1").expect("first toggle");
    feed.toggle_like("1").expect("second toggle");

    let after = serde_json::to_value(feed.snapshot().as_ref()).expect("serialize");
    assert_eq!(before, after);
}

#[test]
fn test_non_engagement_kind_is_left_structurally_unchanged() {
    // Entry "3" is a bare follow notification; entry "2" an achievement
    let feed = seeded_activities();
    let before = serde_json::to_value(feed.snapshot().as_ref()).expect("serialize");

    assert!(!feed.toggle_like("3").expect("follow entry"));
    assert!(!feed.toggle_like("2").expect("achievement entry"));

    let after = serde_json::to_value(feed.snapshot().as_ref()).expect("serialize");
    assert_eq!(before, after, "Non-engagement entries must not mutate");
}

#[test]
fn test_unknown_activity_id_is_not_found() {
    let feed = seeded_activities();
    assert!(matches!(
        feed.toggle_like("999"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_toggling_one_entry_leaves_others_untouched() {
    let feed = seeded_activities();
    let before = serde_json::to_value(&find(&feed.snapshot(), "4").kind).expect("serialize");

    feed.toggle_like("1").expect("toggle");

    let after = serde_json::to_value(&find(&feed.snapshot(), "4").kind).expect("serialize");
    assert_eq!(before, after);
}

#[test]
fn test_set_following_updates_every_entry_for_the_actor() {
    // Build a feed where the same actor appears twice
    let mut entries = seed::activities();
    let mut duplicate = entries[2].clone(); // Alex Rivera, id "3"
    duplicate.id = "5".to_string();
    entries.push(duplicate);
    let feed = ActivityFeed::new(entries);

    let changed = feed.set_following("3", true);
    assert_eq!(changed, 2);

    let snapshot = feed.snapshot();
    for item in snapshot.iter().filter(|a| a.actor.user.id == "3") {
        assert!(item.actor.is_following);
    }
}

#[test]
fn test_set_following_is_idempotent() {
    let feed = seeded_activities();

    assert_eq!(feed.set_following("3", true), 1);
    assert_eq!(feed.set_following("3", true), 0, "Already reconciled");
}

#[test]
fn test_is_following_unknown_actor_is_not_found() {
    let feed = seeded_activities();
    assert!(matches!(
        feed.is_following("999"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_following_filter_tab() {
    let feed = seeded_activities();

    let all = feed.filtered(FeedFilter::All);
    assert_eq!(all.len(), 4);

    let following = feed.filtered(FeedFilter::Following);
    assert_eq!(following.len(), 3);
    assert!(following.iter().all(|a| a.actor.is_following));
}

#[test]
fn test_feed_lines() {
    let feed = seeded_activities();
    let snapshot = feed.snapshot();

    assert_eq!(find(&snapshot, "1").kind.describe(), "shared a new adventure");
    assert_eq!(
        find(&snapshot, "3").kind.describe(),
        "started following Emma Wilson"
    );
    assert_eq!(
        find(&snapshot, "4").kind.describe(),
        "commented on Lakeside Camping Adventure"
    );
    assert!(matches!(find(&snapshot, "2").kind, ActivityKind::Achieved { .. }));
}
