// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for in-browser site search.
//!
//! The browser owns networking and the DOM; Rust owns parsing, the index and
//! scoring. A typical front end:
//!
//! 1. `new SiteSearcher(siteRoot)`, then `loadRecords(JSON.parse(sessionStorage[key]))`
//!    if a snapshot exists.
//! 2. Otherwise fetch `sitemap.xml`, then each page, calling `addPage(url, html)`
//!    as responses arrive, and `markReady()` at the end.
//! 3. On input: `isReady() ? search(q) : quickSearch(location.pathname,
//!    document.documentElement.outerHTML, q)`.
//! 4. Store `snapshot()` back into `sessionStorage`.
//!
//! Debounce and the generation counter stay in JS, where the timers are.

use crate::cache::SiteIndexCache;
use crate::config::SearchConfig;
use crate::fetch::parse_base;
use crate::index::parse_page;
use crate::scoring::ranking::merge_ranked;
use crate::scoring::ScoreLimits;
use crate::search::{quick_search, score};
use crate::types::PageRecord;
use serde_wasm_bindgen::{from_value, to_value};
use url::Url;
use wasm_bindgen::prelude::*;

/// Search index for one site, fed page by page from JavaScript.
#[wasm_bindgen]
pub struct SiteSearcher {
    base: Url,
    cache: SiteIndexCache,
    limits: ScoreLimits,
}

#[wasm_bindgen]
impl SiteSearcher {
    /// `base_url` is the site root (usually `location.origin + "/"`), used to
    /// recognize absolute links to the site in the quick scan. `options` is an
    /// optional config object (`{maxResults, snippetWindow}`).
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: &str, options: JsValue) -> Result<SiteSearcher, JsValue> {
        let base = parse_base(base_url).map_err(|e| e.to_string())?;
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(SiteSearcher {
            base,
            cache: SiteIndexCache::new(),
            limits: config.limits(),
        })
    }

    /// Parse and index one fetched page.
    #[wasm_bindgen(js_name = addPage)]
    pub fn add_page(&self, url: &str, html: &str) {
        self.cache.put(parse_page(url, html));
    }

    /// Replace the index with a snapshot (array of records) and mark it ready.
    #[wasm_bindgen(js_name = loadRecords)]
    pub fn load_records(&self, records: JsValue) -> Result<(), JsValue> {
        let records: Vec<PageRecord> = from_value(records).map_err(|e| e.to_string())?;
        self.cache.load(records);
        Ok(())
    }

    #[wasm_bindgen(js_name = markReady)]
    pub fn mark_ready(&self) {
        self.cache.mark_ready();
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.cache.len()
    }

    /// Ranked results from the index, whatever it holds right now.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let index = self.cache.get();
        let results = score(query, index.records(), &self.limits);
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// Partial index merged with a scan of the loaded page and its links.
    #[wasm_bindgen(js_name = quickSearch)]
    pub fn quick_search(&self, page_url: &str, page_html: &str, query: &str) -> Result<JsValue, JsValue> {
        let index = self.cache.get();
        let indexed = score(query, index.records(), &self.limits);
        let local = quick_search(&self.base, page_url, page_html, query, &self.limits);
        let results = merge_ranked(indexed, local, self.limits.max_results);
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// Records for `sessionStorage`, in the shape `loadRecords` accepts.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&self.cache.get().to_records()).map_err(|e| e.to_string().into())
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}
