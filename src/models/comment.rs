// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Comment tree models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::User;

/// A comment on a trip. Replies are one level deep; a reply's own
/// `replies` list is always empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub is_liked: bool,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Validated input for a new comment or reply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentDraft {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

impl CommentDraft {
    /// Build a draft, trimming surrounding whitespace so a blank
    /// submission fails validation.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_fails_validation() {
        assert!(CommentDraft::new("   ").validate().is_err());
        assert!(CommentDraft::new("Great photos!").validate().is_ok());
    }
}
