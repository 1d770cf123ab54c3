// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip model for the adventure feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A user-submitted trip in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    /// Trip title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Human-readable location ("Yosemite National Park, CA")
    pub location: String,
    /// Author of the trip
    pub author: User,
    /// Ordered photo URLs
    pub photos: Vec<String>,
    /// Like counter, kept in step with `is_liked` by the toggle
    pub likes: u32,
    /// Comment counter shown on the card
    pub comments: u32,
    /// Whether the viewer has liked this trip
    pub is_liked: bool,
    /// Whether the viewer has saved this trip
    pub is_saved: bool,
    /// When the trip was shared
    pub timestamp: DateTime<Utc>,
    /// Optional descriptive metadata
    #[serde(default)]
    pub meta: TripMeta,
}

/// Optional descriptive metadata attached to a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripMeta {
    /// Duration label ("2 days")
    pub duration: Option<String>,
    /// Party size
    pub group_size: Option<u32>,
    /// Season label ("Spring")
    pub season: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Trip distance in kilometers
    pub distance_km: Option<f64>,
}
