// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session boundary over the local store.
//!
//! The signed-in user and the UI theme are the only state that survives
//! a restart. The stored user is validated on load; malformed JSON is
//! reported as an error and the lenient path falls back to no session.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::User;
use crate::storage::{keys, LocalStore};

/// UI color theme, persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the light theme.
    pub fn parse(raw: &str) -> Theme {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Typed load/save boundary for the current user identity.
#[derive(Clone)]
pub struct SessionStore {
    store: LocalStore,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Load the persisted user, validating the stored JSON.
    ///
    /// A missing key means no session; a value that fails to parse is
    /// `MalformedSession`, never a panic.
    pub fn load(&self) -> Result<Option<User>> {
        let Some(raw) = self.store.get(keys::USER) else {
            return Ok(None);
        };
        let user: User =
            serde_json::from_str(&raw).map_err(|e| AppError::MalformedSession(e.to_string()))?;
        Ok(Some(user))
    }

    /// Lenient variant of [`load`](Self::load): malformed state logs a
    /// warning and yields no session.
    pub fn restore(&self) -> Option<User> {
        match self.load() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed session");
                None
            }
        }
    }

    /// Persist `user` as the current session.
    pub fn login(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serializing session: {e}")))?;
        self.store.set(keys::USER, raw)?;
        tracing::info!(user = %user.id, "Session started");
        Ok(())
    }

    /// Clear the current session.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(keys::USER)?;
        tracing::info!("Session ended");
        Ok(())
    }

    /// Persisted theme, defaulting to light.
    pub fn theme(&self) -> Theme {
        self.store
            .get(keys::THEME)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(keys::THEME, theme.as_str())
    }
}
