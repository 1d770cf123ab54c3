// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip collection: like/save toggles and feed queries.

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{AppError, Result};
use crate::models::Trip;

/// Immutable snapshot of the trip collection.
pub type TripSnapshot = Arc<Vec<Trip>>;

/// Sort order for feed queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Newest first
    Recent,
    /// Most likes first
    Popular,
    /// Longest distance first
    Distance,
}

/// Ordered trip collection.
///
/// Every mutation computes a fresh snapshot and commits it in a single
/// step, so the flag and its counter can never diverge across renders,
/// and every subscriber observes the change.
pub struct TripFeed {
    shared: watch::Sender<TripSnapshot>,
}

impl TripFeed {
    pub fn new(trips: Vec<Trip>) -> Self {
        let (shared, _) = watch::channel(Arc::new(trips));
        Self { shared }
    }

    /// Subscribe to collection snapshots.
    pub fn subscribe(&self) -> watch::Receiver<TripSnapshot> {
        self.shared.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> TripSnapshot {
        self.shared.borrow().clone()
    }

    /// Flip `is_liked` and move the like counter with it.
    ///
    /// Toggling twice returns the trip to its original state. The
    /// counter saturates at zero rather than underflowing.
    pub fn toggle_like(&self, trip_id: &str) -> Result<Trip> {
        self.update(trip_id, |trip| {
            trip.is_liked = !trip.is_liked;
            trip.likes = if trip.is_liked {
                trip.likes + 1
            } else {
                trip.likes.saturating_sub(1)
            };
        })
    }

    /// Flip `is_saved`. No counter side effect.
    pub fn toggle_save(&self, trip_id: &str) -> Result<Trip> {
        self.update(trip_id, |trip| trip.is_saved = !trip.is_saved)
    }

    fn update(&self, trip_id: &str, f: impl FnOnce(&mut Trip)) -> Result<Trip> {
        let mut next: Vec<Trip> = self.snapshot().as_ref().clone();
        let trip = next
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| AppError::NotFound(format!("trip {trip_id}")))?;

        f(trip);
        let updated = trip.clone();
        self.shared.send_replace(Arc::new(next));

        tracing::debug!(
            trip = %updated.id,
            likes = updated.likes,
            liked = updated.is_liked,
            saved = updated.is_saved,
            "Trip updated"
        );
        Ok(updated)
    }

    /// Search and sort the collection the way the feed page renders it.
    ///
    /// `search` matches case-insensitively against title, location and
    /// description; an empty query matches everything.
    pub fn query(&self, search: &str, sort: SortBy) -> Vec<Trip> {
        let needle = search.trim().to_lowercase();
        let mut trips: Vec<Trip> = self
            .snapshot()
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.location.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        match sort {
            SortBy::Recent => trips.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            SortBy::Popular => trips.sort_by(|a, b| b.likes.cmp(&a.likes)),
            SortBy::Distance => trips.sort_by(|a, b| {
                let da = a.meta.distance_km.unwrap_or(0.0);
                let db = b.meta.distance_km.unwrap_or(0.0);
                db.partial_cmp(&da).unwrap_or(Ordering::Equal)
            }),
        }
        trips
    }
}
