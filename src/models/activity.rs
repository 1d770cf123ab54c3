// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed models.
//!
//! Feed entries carry a tagged payload per activity kind, so each
//! shape is fixed at compile time. Engagement counters exist only on
//! the kinds that support them; the others cannot be liked at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Actor of a feed entry, carrying the viewer-relative follow flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub user: User,
    pub is_following: bool,
}

/// Trip summary embedded in feed payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Achievement descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Engagement state for kinds that support it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
}

/// Feed entry payload. Exactly one shape is valid per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityKind {
    /// A new trip was shared
    #[serde(rename = "trip")]
    TripShared {
        trip: TripSummary,
        engagement: Engagement,
    },
    /// The actor started following someone
    #[serde(rename = "follow")]
    Followed { target: User },
    /// The actor liked a trip
    #[serde(rename = "like")]
    Liked { trip: TripSummary },
    /// The actor commented on a trip
    #[serde(rename = "comment")]
    Commented {
        trip: TripSummary,
        content: String,
        engagement: Engagement,
    },
    /// The actor earned an achievement
    #[serde(rename = "achievement")]
    Achieved { achievement: Achievement },
}

impl ActivityKind {
    /// Engagement state, for the kinds that carry one.
    pub fn engagement(&self) -> Option<&Engagement> {
        match self {
            ActivityKind::TripShared { engagement, .. }
            | ActivityKind::Commented { engagement, .. } => Some(engagement),
            _ => None,
        }
    }

    pub(crate) fn engagement_mut(&mut self) -> Option<&mut Engagement> {
        match self {
            ActivityKind::TripShared { engagement, .. }
            | ActivityKind::Commented { engagement, .. } => Some(engagement),
            _ => None,
        }
    }

    /// Feed line rendered next to the actor's name.
    pub fn describe(&self) -> String {
        match self {
            ActivityKind::TripShared { .. } => "shared a new adventure".to_string(),
            ActivityKind::Followed { target } => format!("started following {}", target.name),
            ActivityKind::Liked { trip } => format!("liked {}", trip.title),
            ActivityKind::Commented { trip, .. } => format!("commented on {}", trip.title),
            ActivityKind::Achieved { achievement } => {
                format!("earned the \"{}\" achievement", achievement.name)
            }
        }
    }
}

/// One entry in the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub actor: Actor,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ActivityKind,
}
