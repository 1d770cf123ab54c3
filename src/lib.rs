// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Jurni: interaction state model for the outdoor-adventure feed.
//!
//! This crate provides the client-side state engine behind the Jurni
//! prototype: the persisted session, the trip and activity collections,
//! follow reconciliation and per-trip comment threads.

pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod services;
pub mod storage;
pub mod time_utils;

use config::Config;
use dashmap::DashMap;
use services::{ActivityFeed, CommentThread, FollowTracker, TripFeed};
use session::SessionStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub trips: TripFeed,
    pub activities: ActivityFeed,
    pub follows: FollowTracker,
    /// Comment threads keyed by trip id, created when a trip detail
    /// view first needs one.
    pub comments: DashMap<String, CommentThread>,
}
