// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sitemap parsing: `<url><loc>…</loc></url>` entries to site-relative paths.
//!
//! Sitemaps for a brochure site are a flat list of `<loc>` elements, so a
//! regex pass is enough. Entries on other origins or outside the base
//! directory are dropped, duplicates keep their first position.

use crate::error::SitemapError;
use crate::fetch::site_relative_path;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static LOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<loc>\s*(.*?)\s*</loc>").expect("valid loc pattern"));

static ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(urlset|sitemapindex)[\s>]").expect("valid root pattern"));

/// Extract the crawlable paths from a sitemap document.
///
/// A document without a `<urlset>` root and without any `<loc>` entry is
/// malformed. A `<urlset>` with no entries is a valid, empty sitemap.
pub fn parse_sitemap(xml: &str, base: &Url) -> Result<Vec<String>, SitemapError> {
    let has_root = ROOT.is_match(xml);
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    let mut loc_count = 0usize;

    for capture in LOC.captures_iter(xml) {
        loc_count += 1;
        let raw = decode_entities(strip_cdata(&capture[1]));
        let Ok(url) = base.join(&raw) else {
            tracing::debug!(loc = %raw, "skipping unparsable sitemap entry");
            continue;
        };
        match site_relative_path(base, &url) {
            Some(path) => {
                if seen.insert(path.clone()) {
                    paths.push(path);
                }
            }
            None => tracing::debug!(%url, "skipping sitemap entry outside the site"),
        }
    }

    if !has_root && loc_count == 0 {
        return Err(SitemapError::Malformed(
            "no <urlset> root and no <loc> entries".to_string(),
        ));
    }

    Ok(paths)
}

fn strip_cdata(value: &str) -> &str {
    value
        .strip_prefix("<![CDATA[")
        .and_then(|rest| rest.strip_suffix("]]>"))
        .map_or(value, str::trim)
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
