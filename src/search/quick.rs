// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quick local fallback: search the page that is already loaded.
//!
//! While the crawl is running the full index may be empty. Instead of showing
//! nothing, we treat every same-site link on the current page as a tiny record
//! (its text is the title, its href the url) and add the page itself, then
//! score those with the regular scorer. No network involved.

use super::score;
use crate::fetch::site_relative_path;
use crate::index::{parse_page, title_from_url, visible_text};
use crate::scoring::ScoreLimits;
use crate::types::{PageRecord, SearchResult};
use crate::util::collapse_whitespace;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// Score the current page and its same-site links against `query`.
///
/// `base` is the site root the crawl uses and `page_url` the site-relative path
/// of the loaded page. Links are resolved against the page, so
/// `../services.html` on `projects/clark.html` and an absolute
/// `https://<site>/services.html` both become `services.html`, matching the
/// keys the crawl produces.
pub fn quick_search(
    base: &Url,
    page_url: &str,
    page_html: &str,
    query: &str,
    limits: &ScoreLimits,
) -> Vec<SearchResult> {
    if super::normalize_query(query).is_empty() {
        return Vec::new();
    }
    score(query, &page_records(base, page_url, page_html), limits)
}

/// The loaded page followed by one record per distinct same-site link.
pub fn page_records(base: &Url, page_url: &str, page_html: &str) -> Vec<PageRecord> {
    let page = base.join(page_url).unwrap_or_else(|_| base.clone());
    let current = site_relative_path(base, &page).unwrap_or_else(|| page_url.to_string());

    let document = Html::parse_document(page_html);
    let mut seen = HashSet::from([current.clone()]);
    let mut records = vec![parse_page(&current, page_html)];

    for anchor in document.select(&LINKS) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if is_non_page_link(href) {
            continue;
        }
        let Ok(target) = page.join(href) else {
            continue;
        };
        let Some(url) = site_relative_path(base, &target) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        let text = visible_text(anchor);
        let title = if !text.is_empty() {
            text
        } else {
            anchor
                .value()
                .attr("aria-label")
                .or_else(|| anchor.value().attr("title"))
                .map(collapse_whitespace)
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| title_from_url(&url))
        };

        records.push(PageRecord {
            url,
            title,
            description: String::new(),
            body_text: String::new(),
        });
    }

    records
}

fn is_non_page_link(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    href.is_empty()
        || href.starts_with('#')
        || ["mailto:", "tel:", "javascript:", "data:", "sms:"]
            .iter()
            .any(|scheme| lower.starts_with(scheme))
}
