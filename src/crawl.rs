// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sitemap crawl: fetch every listed page and index it into the cache.
//!
//! Pages are fetched one at a time to keep network load bounded, and each is
//! inserted as soon as it is parsed so queries see partial results. A failed
//! page is logged and skipped. A failed or malformed sitemap leaves the index
//! empty. Either way the cache ends up marked ready: the crawl has finished,
//! it just found less than it hoped.

use crate::cache::SiteIndexCache;
use crate::fetch::PageFetcher;
use crate::index::{parse_page, parse_sitemap};
use url::Url;

/// Progress notifications, e.g. for a progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    SitemapLoaded { pages: usize },
    PageIndexed { url: String },
    PageSkipped { url: String, reason: String },
}

/// What a finished crawl did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Distinct same-origin pages listed in the sitemap.
    pub listed: usize,
    pub indexed: usize,
    /// Pages that could not be fetched, with the reason.
    pub skipped: Vec<(String, String)>,
    /// Set when the sitemap itself was unavailable or malformed.
    pub sitemap_error: Option<String>,
}

/// Drives one crawl of a site through a `PageFetcher`.
pub struct Crawler<F> {
    fetcher: F,
    base: Url,
    sitemap_path: String,
}

impl<F: PageFetcher> Crawler<F> {
    /// `base` is the site root used to resolve sitemap entries.
    pub fn new(fetcher: F, base: Url, sitemap_path: impl Into<String>) -> Self {
        Self {
            fetcher,
            base,
            sitemap_path: sitemap_path.into(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Fetch and parse the sitemap into site-relative paths.
    pub async fn sitemap_paths(&self) -> Result<Vec<String>, String> {
        let xml = self
            .fetcher
            .fetch(&self.sitemap_path)
            .await
            .map_err(|e| e.to_string())?;
        parse_sitemap(&xml, &self.base).map_err(|e| e.to_string())
    }

    pub async fn crawl(&self, cache: &SiteIndexCache) -> CrawlReport {
        self.crawl_with(cache, |_| {}).await
    }

    /// Crawl, reporting each step to `observer`.
    pub async fn crawl_with(
        &self,
        cache: &SiteIndexCache,
        mut observer: impl FnMut(CrawlEvent) + Send,
    ) -> CrawlReport {
        let mut report = CrawlReport::default();

        let paths = match self.sitemap_paths().await {
            Ok(paths) => paths,
            Err(reason) => {
                tracing::warn!(sitemap = %self.sitemap_path, %reason, "sitemap unusable, index stays empty");
                report.sitemap_error = Some(reason);
                observer(CrawlEvent::SitemapLoaded { pages: 0 });
                cache.mark_ready();
                return report;
            }
        };

        report.listed = paths.len();
        observer(CrawlEvent::SitemapLoaded { pages: paths.len() });

        for path in paths {
            match self.fetcher.fetch(&path).await {
                Ok(html) => {
                    cache.put(parse_page(&path, &html));
                    report.indexed += 1;
                    tracing::debug!(url = %path, "indexed page");
                    observer(CrawlEvent::PageIndexed { url: path });
                }
                Err(e) => {
                    let reason = e.to_string();
                    tracing::warn!(url = %path, %reason, "skipping page");
                    observer(CrawlEvent::PageSkipped {
                        url: path.clone(),
                        reason: reason.clone(),
                    });
                    report.skipped.push((path, reason));
                }
            }
        }

        cache.mark_ready();
        tracing::info!(
            listed = report.listed,
            indexed = report.indexed,
            skipped = report.skipped.len(),
            "crawl finished"
        );
        report
    }
}
