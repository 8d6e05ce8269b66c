// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search controller: wires a search box to the index.
//!
//! # Lifecycle
//!
//! ```text
//! SearchController::new(surface, crawler, cache, config)
//!        │
//!        ├── start_indexing()   once per controller; later calls are no-ops
//!        │      └── restore session snapshot, or crawl in the background
//!        │             └── on completion: persist snapshot, refresh results
//!        │                   (no snapshot if the sitemap failed; the quick
//!        │                   scan then stays on for the session)
//!        │
//!        ├── on_input()         every keystroke
//!        │      ├── index not ready → render partial + quick scan at once
//!        │      └── index ready     → wait out the debounce, render if still current
//!        │
//!        ├── submit()           navigate to the first ranked result
//!        └── dismiss()          collapse, forget the query, void pending renders
//! ```
//!
//! # Cancellation
//!
//! There are no timers to cancel. Every input bumps a generation counter and
//! a pending render only goes through if its generation is still the latest.
//! A dismissal bumps the counter too, so nothing renders into a closed panel.
//!
//! The background crawl holds only a weak reference to the controller. If the
//! controller is dropped first, the crawl finishes into the cache and stops
//! without rendering.

pub mod surface;

pub use surface::{CurrentPage, SearchSurface};

use crate::cache::{persist_index, restore_index, SessionStore, SiteIndexCache};
use crate::config::SearchConfig;
use crate::crawl::{CrawlReport, Crawler};
use crate::fetch::PageFetcher;
use crate::scoring::ranking::merge_ranked;
use crate::search::{normalize_query, quick_search, score};
use crate::types::{IndexStatus, SearchResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::task::JoinHandle;

/// What the controller knows about the query being typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub raw_input: String,
    /// Generation of the latest input or dismissal.
    pub generation: u64,
    /// Results most recently pushed to the surface.
    pub last_rendered: Vec<SearchResult>,
}

struct SessionBinding {
    store: Arc<dyn SessionStore>,
    key: String,
}

struct Inner<F, S> {
    surface: S,
    crawler: Arc<Crawler<F>>,
    cache: Arc<SiteIndexCache>,
    config: SearchConfig,
    generation: AtomicU64,
    state: Mutex<QueryState>,
    indexing_started: AtomicBool,
    /// Set when the crawl finished without a usable sitemap.
    sitemap_failed: AtomicBool,
    session: OnceLock<SessionBinding>,
}

/// Owns one search surface and drives it from the site index.
///
/// Cloning is cheap and shares state; it is how event handlers get a handle.
pub struct SearchController<F, S> {
    inner: Arc<Inner<F, S>>,
}

impl<F, S> Clone for SearchController<F, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, S> SearchController<F, S>
where
    F: PageFetcher + 'static,
    S: SearchSurface,
{
    pub fn new(surface: S, crawler: Crawler<F>, cache: Arc<SiteIndexCache>, config: SearchConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                crawler: Arc::new(crawler),
                cache,
                config,
                generation: AtomicU64::new(0),
                state: Mutex::new(QueryState::default()),
                indexing_started: AtomicBool::new(false),
                sitemap_failed: AtomicBool::new(false),
                session: OnceLock::new(),
            }),
        }
    }

    /// Restore from and save to `store` under `key`. Only the first call counts.
    pub fn with_session(self, store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        let binding = SessionBinding {
            store,
            key: key.into(),
        };
        if let Err(ignored) = self.inner.session.set(binding) {
            tracing::debug!(key = %ignored.key, "session store already bound");
        }
        self
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn cache(&self) -> &Arc<SiteIndexCache> {
        &self.inner.cache
    }

    pub fn state(&self) -> QueryState {
        self.inner.state.lock().clone()
    }

    pub fn status(&self) -> IndexStatus {
        self.inner.status()
    }

    /// Build the index unless that has already been started.
    ///
    /// A session snapshot is used when present, in which case no crawl runs
    /// and `None` is returned. Otherwise the crawl is spawned on the current
    /// tokio runtime and its handle returned. Only the first call does
    /// anything.
    pub fn start_indexing(&self) -> Option<JoinHandle<CrawlReport>> {
        if self.inner.indexing_started.swap(true, Ordering::AcqRel) {
            tracing::debug!("indexing already started");
            return None;
        }

        if self.inner.restore_session() {
            self.inner.refresh();
            return None;
        }

        let crawler = Arc::clone(&self.inner.crawler);
        let cache = Arc::clone(&self.inner.cache);
        let controller = Arc::downgrade(&self.inner);
        Some(tokio::spawn(async move {
            let report = crawler.crawl(&cache).await;
            match controller.upgrade() {
                Some(inner) => {
                    if report.sitemap_error.is_some() {
                        // Nothing worth restoring; the quick scan keeps answering
                        inner.sitemap_failed.store(true, Ordering::Release);
                    } else {
                        inner.persist_session();
                    }
                    inner.refresh();
                }
                None => tracing::debug!("controller dropped before crawl finished"),
            }
            report
        }))
    }

    /// Handle an input change. Returns a handle resolving to whether the
    /// results were rendered (false when a newer input superseded this one).
    pub fn on_input(&self) -> JoinHandle<bool> {
        let (raw, generation) = self.inner.begin_input();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.settle_input(&raw, generation).await })
    }

    /// Keyboard submit: go to the best match for the current input.
    pub fn submit(&self) -> Option<String> {
        let raw = self.inner.surface.input_value();
        let first = self.inner.results_for(&raw).into_iter().next()?;
        self.inner.surface.navigate(&first.url);
        self.dismiss();
        Some(first.url)
    }

    /// Close the panel and drop the query. Pending renders become stale.
    pub fn dismiss(&self) {
        self.inner.dismiss();
    }

    /// Pointer or focus event anywhere on the page.
    pub fn on_pointer_down(&self, inside_surface: bool) {
        if !inside_surface {
            self.inner.dismiss();
        }
    }
}

impl<F, S> Inner<F, S>
where
    F: PageFetcher + 'static,
    S: SearchSurface,
{
    fn status(&self) -> IndexStatus {
        if self.cache.is_ready() {
            IndexStatus::Ready
        } else {
            IndexStatus::Indexing
        }
    }

    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }

    /// Record the new input and claim a generation for it, before any await.
    ///
    /// The generation is bumped under the state lock, so the stored input
    /// always belongs to the latest generation.
    fn begin_input(&self) -> (String, u64) {
        let raw = self.surface.input_value();
        let mut state = self.state.lock();
        let generation = self.bump_generation();
        state.raw_input = raw.clone();
        state.generation = generation;
        (raw, generation)
    }

    async fn settle_input(&self, raw: &str, generation: u64) -> bool {
        // The partial index plus quick scan is cheap and should feel instant.
        if self.cache.is_ready() {
            tokio::time::sleep(self.config.debounce()).await;
        }
        self.render_if_current(raw, generation)
    }

    /// Ranked results for `raw`: the full index once ready, otherwise the
    /// partial index merged with the quick scan of the current page. A crawl
    /// that lost its sitemap keeps the quick scan for the rest of the session.
    fn results_for(&self, raw: &str) -> Vec<SearchResult> {
        let limits = self.config.limits();
        let index = self.cache.get();
        let indexed = score(raw, index.records(), &limits);
        if self.cache.is_ready() && !self.sitemap_failed.load(Ordering::Acquire) {
            return indexed;
        }
        let page = self.surface.current_page();
        let quick = quick_search(self.crawler.base(), &page.url, &page.html, raw, &limits);
        merge_ranked(indexed, quick, limits.max_results)
    }

    fn render_if_current(&self, raw: &str, generation: u64) -> bool {
        if !self.is_current(generation) {
            tracing::trace!(generation, "dropping stale render");
            return false;
        }

        if normalize_query(raw).is_empty() {
            self.surface.render(&[], self.status());
            self.surface.set_expanded(false);
            self.state.lock().last_rendered.clear();
            return true;
        }

        let results = self.results_for(raw);
        if !self.is_current(generation) {
            return false;
        }
        self.surface.render(&results, self.status());
        self.surface.set_expanded(true);
        self.state.lock().last_rendered = results;
        true
    }

    /// Re-render the current query, e.g. once the crawl has finished.
    fn refresh(&self) {
        let (raw, generation) = {
            let state = self.state.lock();
            (state.raw_input.clone(), state.generation)
        };
        if raw.is_empty() {
            return;
        }
        self.render_if_current(&raw, generation);
    }

    fn dismiss(&self) {
        let mut state = self.state.lock();
        let generation = self.bump_generation();
        *state = QueryState {
            generation,
            ..QueryState::default()
        };
        drop(state);
        self.surface.set_expanded(false);
    }

    fn restore_session(&self) -> bool {
        match self.session.get() {
            Some(binding) => restore_index(&self.cache, binding.store.as_ref(), &binding.key),
            None => false,
        }
    }

    fn persist_session(&self) {
        if let Some(binding) = self.session.get() {
            persist_index(&self.cache, binding.store.as_ref(), &binding.key);
        }
    }
}
