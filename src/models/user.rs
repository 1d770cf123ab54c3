//! User model for the session and entity references.

use serde::{Deserialize, Serialize};

/// A Jurni user. Owned by the session store when it represents the
/// signed-in identity; referenced read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (may be None if not shared)
    pub email: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Short profile bio
    pub bio: Option<String>,
    /// Follower count shown on the profile page
    pub followers: Option<u32>,
    /// Following count shown on the profile page
    pub following: Option<u32>,
    /// Number of trips shared
    pub trips: Option<u32>,
}
