// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the interaction model.

/// Application error type returned by every fallible operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Parent comment not found: {0}")]
    ParentNotFound(String),

    #[error("Follow confirmation already pending for user {0}")]
    FollowPending(String),

    #[error("Follow confirmation rejected for user {0}")]
    ConfirmationFailed(String),

    #[error("Malformed persisted session: {0}")]
    MalformedSession(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for UI surfaces and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::ParentNotFound(_) => "parent_not_found",
            AppError::FollowPending(_) => "follow_pending",
            AppError::ConfirmationFailed(_) => "confirmation_failed",
            AppError::MalformedSession(_) => "malformed_session",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                "storage_error"
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                "internal_error"
            }
        }
    }
}

/// Result type alias for interaction operations
pub type Result<T> = std::result::Result<T, AppError>;
