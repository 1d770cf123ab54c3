// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-trip comment thread: appends and like toggles over a one-level
//! tree.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Comment, CommentDraft, User};

/// Immutable snapshot of a comment thread.
pub type CommentSnapshot = Arc<Vec<Comment>>;

/// Ordered comment tree for one trip.
///
/// New entries are appended, so list order is submission order.
pub struct CommentThread {
    shared: watch::Sender<CommentSnapshot>,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        let (shared, _) = watch::channel(Arc::new(comments));
        Self { shared }
    }

    /// Subscribe to thread snapshots.
    pub fn subscribe(&self) -> watch::Receiver<CommentSnapshot> {
        self.shared.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> CommentSnapshot {
        self.shared.borrow().clone()
    }

    /// Number of comments including replies.
    pub fn total(&self) -> usize {
        self.snapshot().iter().map(|c| 1 + c.replies.len()).sum()
    }

    /// Append a comment, or a reply when `parent_id` names a top-level
    /// comment.
    ///
    /// Replies to replies are not representable; a `parent_id` that
    /// matches nothing at the top level (including the id of a reply)
    /// fails with `ParentNotFound` and leaves the thread unchanged.
    pub fn add(
        &self,
        author: User,
        draft: &CommentDraft,
        parent_id: Option<&str>,
    ) -> Result<Comment> {
        draft
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            author,
            content: draft.content.clone(),
            timestamp: Utc::now(),
            likes: 0,
            is_liked: false,
            replies: Vec::new(),
        };

        let mut next: Vec<Comment> = self.snapshot().as_ref().clone();
        match parent_id {
            Some(pid) => {
                let parent = next
                    .iter_mut()
                    .find(|c| c.id == pid)
                    .ok_or_else(|| AppError::ParentNotFound(pid.to_string()))?;
                parent.replies.push(comment.clone());
            }
            None => next.push(comment.clone()),
        }

        self.shared.send_replace(Arc::new(next));
        tracing::debug!(
            comment = %comment.id,
            parent = parent_id.unwrap_or("-"),
            "Comment added"
        );
        Ok(comment)
    }

    /// Toggle the like on the comment or reply with `id`.
    ///
    /// Searches the top level, then each comment's immediate replies,
    /// and mutates exactly the matching node.
    pub fn toggle_like(&self, id: &str) -> Result<Comment> {
        let mut next: Vec<Comment> = self.snapshot().as_ref().clone();
        let node = find_node(&mut next, id)
            .ok_or_else(|| AppError::NotFound(format!("comment {id}")))?;

        node.is_liked = !node.is_liked;
        node.likes = if node.is_liked {
            node.likes + 1
        } else {
            node.likes.saturating_sub(1)
        };
        let updated = node.clone();

        self.shared.send_replace(Arc::new(next));
        Ok(updated)
    }
}

/// Find a comment by id at the top level or one reply level down.
fn find_node<'a>(comments: &'a mut [Comment], id: &str) -> Option<&'a mut Comment> {
    for comment in comments.iter_mut() {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(reply) = comment.replies.iter_mut().find(|r| r.id == id) {
            return Some(reply);
        }
    }
    None
}
