// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session snapshots of the built index.
//!
//! A reload within the same session should not re-crawl the site. The snapshot
//! is a flat JSON array of `PageRecord`s stored under a key string. There is
//! no version field: the key carries a prefix that is bumped whenever the
//! record format changes, plus a CRC32 of the site origin so two sites never
//! share a snapshot.

use super::SiteIndexCache;
use crate::error::SessionError;
use crate::types::PageRecord;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage for index snapshots keyed by string.
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<Vec<PageRecord>>, SessionError>;
    fn save(&self, key: &str, records: &[PageRecord]) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Cache key for one site: `<prefix>-<crc32 of origin>`.
pub fn session_key(prefix: &str, origin: &str) -> String {
    let prefix: String = prefix
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}-{:08x}", prefix, crc32fast::hash(origin.as_bytes()))
}

/// Fill `cache` from the store. Returns true on a hit.
///
/// Store failures and undecodable snapshots are logged and treated as a miss.
pub fn restore_index(cache: &SiteIndexCache, store: &dyn SessionStore, key: &str) -> bool {
    match store.load(key) {
        Ok(Some(records)) => {
            tracing::info!(key, pages = records.len(), "restored index from session snapshot");
            cache.load(records);
            true
        }
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable session snapshot");
            false
        }
    }
}

/// Write the current index to the store. Failures are logged, never returned.
pub fn persist_index(cache: &SiteIndexCache, store: &dyn SessionStore, key: &str) {
    let records = cache.get().to_records();
    if let Err(e) = store.save(key, &records) {
        tracing::warn!(key, error = %e, "failed to save session snapshot");
    }
}

/// In-process store; lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<Vec<PageRecord>>, SessionError> {
        match self.entries.lock().get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, records: &[PageRecord]) -> Result<(), SessionError> {
        let json = serde_json::to_string(records)?;
        self.entries.lock().insert(key.to_string(), json);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per snapshot inside a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<Vec<PageRecord>>, SessionError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SessionError::Io { path, source }),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, key: &str, records: &[PageRecord]) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(|source| SessionError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        let json = serde_json::to_string(records)?;
        fs::write(&path, json).map_err(|source| SessionError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io { path, source }),
        }
    }
}
