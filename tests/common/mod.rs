// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use jurni_core::models::User;
use jurni_core::seed;
use jurni_core::services::{ActivityFeed, CommentThread, TripFeed};
use jurni_core::storage::LocalStore;
use std::path::PathBuf;

/// Trip feed loaded with the seed trips.
#[allow(dead_code)]
pub fn seeded_trips() -> TripFeed {
    TripFeed::new(seed::trips())
}

/// Activity feed loaded with the seed entries.
#[allow(dead_code)]
pub fn seeded_activities() -> ActivityFeed {
    ActivityFeed::new(seed::activities())
}

/// Comment thread loaded with the seed comments for trip "1".
#[allow(dead_code)]
pub fn seeded_comments() -> CommentThread {
    CommentThread::new(seed::comments())
}

/// A user to author new comments with.
#[allow(dead_code)]
pub fn test_user() -> User {
    User {
        id: "42".to_string(),
        name: "Test Hiker".to_string(),
        email: Some("hiker@example.com".to_string()),
        avatar: None,
        bio: None,
        followers: None,
        following: None,
        trips: None,
    }
}

/// A unique store path under the system temp directory.
#[allow(dead_code)]
pub fn temp_store_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("jurni-{}-{}.json", name, uuid::Uuid::new_v4()))
}

/// A store persisted to a unique temp path.
#[allow(dead_code)]
pub fn temp_store(name: &str) -> LocalStore {
    LocalStore::open(temp_store_path(name)).expect("Failed to open temp store")
}
