// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - interaction state engines.

pub mod activity;
pub mod comments;
pub mod follow;
pub mod trips;

pub use activity::{ActivityFeed, ActivitySnapshot, FeedFilter};
pub use comments::{CommentSnapshot, CommentThread};
pub use follow::{FollowPhase, FollowReconciler, FollowTracker};
pub use trips::{SortBy, TripFeed, TripSnapshot};
