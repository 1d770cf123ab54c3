// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Jurni feed demo
//!
//! Boots the interaction model from seed data, restores the persisted
//! session and walks through the feed operations, logging each
//! transition.

use dashmap::DashMap;
use jurni_core::{
    config::Config,
    models::CommentDraft,
    seed,
    services::{ActivityFeed, CommentThread, FollowReconciler, FollowTracker, SortBy, TripFeed},
    session::SessionStore,
    storage::LocalStore,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Jurni feed demo");

    // Open the persisted local store and the session boundary on top
    let store = LocalStore::open(config.data_dir.join("storage.json"))?;
    let session = SessionStore::new(store);
    tracing::info!(theme = session.theme().as_str(), "Theme loaded");

    // Restore the session, or sign in the first seed user
    let user = match session.restore() {
        Some(user) => {
            tracing::info!(user = %user.name, "Session restored");
            user
        }
        None => {
            let user = seed::users().into_iter().next().expect("seed users");
            session.login(&user)?;
            user
        }
    };

    // Seed the collections
    let state = AppState {
        trips: TripFeed::new(seed::trips()),
        activities: ActivityFeed::new(seed::activities()),
        follows: FollowTracker::new(FollowReconciler::new(config.follow_confirm_delay)),
        comments: DashMap::new(),
        session,
        config,
    };
    state
        .comments
        .insert("1".to_string(), CommentThread::new(seed::comments()));

    // Like and save from the feed
    let liked = state.trips.toggle_like("2")?;
    tracing::info!(trip = %liked.title, likes = liked.likes, "Toggled like");
    let saved = state.trips.toggle_save("3")?;
    tracing::info!(trip = %saved.title, saved = saved.is_saved, "Toggled save");

    // Most popular trips, the way the explore view sorts them
    for trip in state.trips.query("", SortBy::Popular) {
        tracing::info!(trip = %trip.title, likes = trip.likes, "Feed entry");
    }

    // Follow an adventurer surfaced in the activity feed
    let following = state.follows.toggle_follow(&state.activities, "3").await?;
    tracing::info!(actor = "3", following, "Follow reconciled");

    // Leave a comment and a reply on the top trip
    let thread = state.comments.get("1").expect("seed thread");
    let comment = thread.add(
        user.clone(),
        &CommentDraft::new("Stunning views, adding this one to my list!"),
        None,
    )?;
    thread.add(
        user,
        &CommentDraft::new("Going back next month."),
        Some(&comment.id),
    )?;
    tracing::info!(total = thread.total(), "Comment thread updated");

    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jurni_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
