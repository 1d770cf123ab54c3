// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed key/value store standing in for browser local storage.
//!
//! The whole store is a single JSON object on disk. Every mutation
//! persists synchronously, matching the write-on-every-change behavior
//! of the session it backs. There is no cross-process change
//! notification; a second process sees updates only when it reopens
//! the store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{AppError, Result};

/// String key/value store persisted as one JSON document.
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<Inner>,
}

struct Inner {
    /// None for a purely in-memory store
    path: Option<PathBuf>,
    entries: DashMap<String, String>,
}

impl LocalStore {
    /// Open a store at `path`, loading any existing entries.
    ///
    /// A missing file is an empty store; an unreadable or malformed
    /// file is an error rather than silently discarded data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = DashMap::new();

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let map: BTreeMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
                    AppError::Storage(format!("Malformed store file {}: {e}", path.display()))
                })?;
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::Storage(format!("{}: {e}", path.display())));
            }
        }

        tracing::debug!(path = %path.display(), entries = entries.len(), "Store opened");
        Ok(Self {
            inner: Arc::new(Inner {
                path: Some(path),
                entries,
            }),
        })
    }

    /// Store that never touches disk, for tests and demos.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                path: None,
                entries: DashMap::new(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.entries.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<()> {
        self.inner.entries.insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.inner.entries.remove(key);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.inner.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .map_err(|e| AppError::Storage(format!("{}: {e}", dir.display())))?;
            }
        }

        // BTreeMap keeps the on-disk document stable across writes.
        let map: BTreeMap<String, String> = self
            .inner
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let body = serde_json::to_string_pretty(&map)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serializing store: {e}")))?;

        fs::write(path, body).map_err(|e| AppError::Storage(format!("{}: {e}", path.display())))
    }
}
