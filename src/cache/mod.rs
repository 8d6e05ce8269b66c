// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The session-wide set of indexed pages.
//!
//! The crawl writes, queries read, and the two overlap: a query typed while the
//! crawl is still fetching must score against whatever has arrived so far.
//! Records are stored behind `Arc` and never mutated after insertion, so a
//! read is a cheap snapshot of pointers taken under a short read lock. Nothing
//! blocks on an in-flight fetch.

pub mod session;

pub use session::{
    persist_index, restore_index, session_key, FileSessionStore, MemorySessionStore, SessionStore,
};

use crate::types::PageRecord;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A point-in-time view of the index, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    records: Vec<Arc<PageRecord>>,
}

impl SiteIndex {
    pub fn records(&self) -> &[Arc<PageRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.records.iter().map(Arc::as_ref).find(|r| r.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter().map(Arc::as_ref)
    }

    /// Owned copies, e.g. for a session snapshot.
    pub fn to_records(&self) -> Vec<PageRecord> {
        self.iter().cloned().collect()
    }
}

#[derive(Debug, Default)]
struct CacheState {
    records: Vec<Arc<PageRecord>>,
    positions: HashMap<String, usize>,
}

/// Holds the indexed pages for the session and whether the crawl has finished.
#[derive(Debug, Default)]
pub struct SiteIndexCache {
    state: RwLock<CacheState>,
    ready: AtomicBool,
}

impl SiteIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, partial or complete.
    pub fn get(&self) -> SiteIndex {
        SiteIndex {
            records: self.state.read().records.clone(),
        }
    }

    /// Insert or replace the record for `record.url`.
    ///
    /// A replaced record keeps its original position, so re-crawling a page
    /// does not change how ties are broken.
    pub fn put(&self, record: PageRecord) {
        let mut state = self.state.write();
        match state.positions.get(&record.url).copied() {
            Some(position) => state.records[position] = Arc::new(record),
            None => {
                let position = state.records.len();
                state.positions.insert(record.url.clone(), position);
                state.records.push(Arc::new(record));
            }
        }
    }

    /// Replace the whole index with `records` and mark it ready.
    pub fn load(&self, records: Vec<PageRecord>) {
        self.clear();
        for record in records {
            self.put(record);
        }
        self.mark_ready();
    }

    /// True once the crawl driven by the sitemap has finished.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Drop every record and go back to "not ready".
    pub fn clear(&self) {
        *self.state.write() = CacheState::default();
        self.ready.store(false, Ordering::Release);
    }

    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
