// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side style site search for small static sites.
//!
//! A brochure site has a sitemap, a couple of dozen pages and no search
//! backend. This crate crawls the sitemap, indexes every page's title, meta
//! description and visible text, and ranks pages against a free-text query
//! with substring matching and field weights. No stemming, no fuzzy matching:
//! people type "showroom" and expect the showroom page.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────────┐   ┌────────────┐
//! │   fetch    │──▶│   index    │──▶│     cache      │──▶│   search   │
//! │ PageFetcher│   │ parse_page │   │ SiteIndexCache │   │   score    │
//! │ HttpFetcher│   │  sitemap   │   │    session     │   │   quick    │
//! └────────────┘   └────────────┘   └────────────────┘   └────────────┘
//!        ▲                                  ▲                   │
//!        │          ┌────────────┐          │                   ▼
//!        └──────────│   crawl    │──────────┘           ┌──────────────┐
//!                   └────────────┘                      │  controller  │
//!                         ▲                             │ SearchSurface│
//!                         └─────────────────────────────└──────────────┘
//! ```
//!
//! Data flows one way: sitemap URLs → fetched documents → parsed records →
//! cached index → query-time scoring → rendered result list. `scoring` holds
//! the weights, ranking and snippet windows `search` builds on.
//!
//! # Usage
//!
//! ```ignore
//! use vitrine::{Crawler, HttpFetcher, SearchConfig, SiteIndexCache, score};
//!
//! let config = SearchConfig::default();
//! let fetcher = HttpFetcher::new("https://example.com/", &config)?;
//! let base = fetcher.base().clone();
//! let cache = SiteIndexCache::new();
//! Crawler::new(fetcher, base, &config.sitemap_path).crawl(&cache).await;
//!
//! let results = score("showroom", cache.get().records(), &config.limits());
//! ```
//!
//! # Features
//!
//! - `native` (default): HTTP fetcher, the debounced controller and the CLI.
//! - `wasm`: `SiteSearcher` bindings for running the index in a browser.

pub mod audit;
pub mod cache;
pub mod config;
#[cfg(feature = "native")]
pub mod controller;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::SiteSearcher;

pub use cache::{
    persist_index, restore_index, session_key, FileSessionStore, MemorySessionStore, SessionStore,
    SiteIndex, SiteIndexCache,
};
pub use config::SearchConfig;
#[cfg(feature = "native")]
pub use controller::{CurrentPage, QueryState, SearchController, SearchSurface};
pub use crawl::{CrawlEvent, CrawlReport, Crawler};
pub use error::{ConfigError, FetchError, SessionError, SitemapError};
#[cfg(feature = "native")]
pub use fetch::HttpFetcher;
pub use fetch::PageFetcher;
pub use index::{parse_page, parse_sitemap};
pub use scoring::ScoreLimits;
pub use search::{quick_search, score};
pub use types::{IndexStatus, PageRecord, SearchResult};
