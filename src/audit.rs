// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site audit: SEO tags and front-end performance hygiene, page by page.
//!
//! This is the crawl's sibling. It walks the same pages through the same
//! `PageFetcher`, but instead of indexing text it checks the markup for the
//! things search engines and browsers care about:
//!
//! | Check          | Passes when                                          |
//! |----------------|------------------------------------------------------|
//! | title          | `<title>` has text                                   |
//! | description    | `meta[name=description]` has content                 |
//! | viewport       | `meta[name=viewport]` present                        |
//! | canonical      | `link[rel=canonical]` has an href                    |
//! | og:title       | `meta[property=og:title]` has content                |
//! | og:image       | `meta[property=og:image]` has content                |
//! | twitter:card   | `meta[name=twitter:card]` present                    |
//! | h1             | an `<h1>` has text                                   |
//! | lazy images    | at least 80% of `<img>` use `loading="lazy"`         |
//! | scripts        | no external script without `defer`/`async`/module    |
//! | stylesheets    | no stylesheet loaded from another host               |
//! | image sizes    | at least 80% of `<img>` carry `width` and `height`   |
//!
//! A page without images passes both image checks.

use crate::fetch::PageFetcher;
use crate::index::{first_text, meta_content, select_first};
use scraper::{Html, Selector};
use serde::Serialize;

/// Share of images that must satisfy an image check for it to pass.
pub const IMAGE_PASS_PERCENT: u32 = 80;

/// Number of performance checks per page.
pub const PERF_CHECKS: usize = 4;

/// SEO tags found on one page. `None` means missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAudit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub viewport: bool,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: bool,
    pub h1: Option<String>,
}

impl SeoAudit {
    /// `(label, passed)` for every SEO check, in display order.
    pub fn checks(&self) -> [(&'static str, bool); 8] {
        [
            ("Title", self.title.is_some()),
            ("Description", self.description.is_some()),
            ("Viewport", self.viewport),
            ("Canonical", self.canonical.is_some()),
            ("OG Title", self.og_title.is_some()),
            ("OG Image", self.og_image.is_some()),
            ("Twitter Card", self.twitter_card),
            ("H1", self.h1.is_some()),
        ]
    }

    pub fn passed(&self) -> usize {
        self.checks().iter().filter(|(_, ok)| *ok).count()
    }

    pub fn ratio(&self) -> f64 {
        self.passed() as f64 / self.checks().len() as f64
    }
}

/// Asset counts relevant to load performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfAudit {
    pub images: usize,
    pub lazy_images: usize,
    pub sized_images: usize,
    pub external_scripts: usize,
    pub deferred_scripts: usize,
    pub blocking_scripts: usize,
    pub external_stylesheets: usize,
}

impl PerfAudit {
    /// Percentage of images with `loading="lazy"`, `None` without images.
    pub fn lazy_percent(&self) -> Option<u32> {
        percent(self.lazy_images, self.images)
    }

    pub fn sized_percent(&self) -> Option<u32> {
        percent(self.sized_images, self.images)
    }

    pub fn lazy_ok(&self) -> bool {
        self.lazy_percent().map_or(true, |p| p >= IMAGE_PASS_PERCENT)
    }

    pub fn scripts_ok(&self) -> bool {
        self.blocking_scripts == 0
    }

    pub fn stylesheets_ok(&self) -> bool {
        self.external_stylesheets == 0
    }

    pub fn sizes_ok(&self) -> bool {
        self.sized_percent().map_or(true, |p| p >= IMAGE_PASS_PERCENT)
    }

    pub fn passed(&self) -> usize {
        [self.lazy_ok(), self.scripts_ok(), self.stylesheets_ok(), self.sizes_ok()]
            .iter()
            .filter(|ok| **ok)
            .count()
    }

    pub fn ratio(&self) -> f64 {
        self.passed() as f64 / PERF_CHECKS as f64
    }
}

fn percent(part: usize, total: usize) -> Option<u32> {
    (total > 0).then(|| ((part as f64 / total as f64) * 100.0).round() as u32)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAudit {
    pub page: String,
    pub seo: SeoAudit,
    pub performance: PerfAudit,
}

/// Whether the well-known crawler files are served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFiles {
    pub robots_txt: bool,
    pub sitemap_xml: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub static_files: StaticFiles,
    pub pages: Vec<PageAudit>,
    /// Pages that could not be fetched, with the reason.
    pub unreachable: Vec<(String, String)>,
}

impl AuditReport {
    /// Mean SEO pass rate over audited pages, as a whole percentage.
    pub fn average_seo_percent(&self) -> Option<u32> {
        self.average(|page| page.seo.ratio())
    }

    pub fn average_perf_percent(&self) -> Option<u32> {
        self.average(|page| page.performance.ratio())
    }

    fn average(&self, ratio: impl Fn(&PageAudit) -> f64) -> Option<u32> {
        if self.pages.is_empty() {
            return None;
        }
        let total: f64 = self.pages.iter().map(ratio).sum();
        Some((total / self.pages.len() as f64 * 100.0).round() as u32)
    }
}

/// Audit one page's markup.
pub fn audit_html(page: &str, html: &str) -> PageAudit {
    let document = Html::parse_document(html);
    PageAudit {
        page: page.to_string(),
        seo: check_seo(&document),
        performance: check_performance(&document),
    }
}

fn check_seo(document: &Html) -> SeoAudit {
    SeoAudit {
        title: first_text(document, "title"),
        description: meta_content(document, r#"meta[name="description"]"#),
        viewport: select_first(document, r#"meta[name="viewport"]"#).is_some(),
        canonical: select_first(document, r#"link[rel="canonical"]"#)
            .and_then(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string),
        og_title: meta_content(document, r#"meta[property="og:title"]"#),
        og_image: meta_content(document, r#"meta[property="og:image"]"#),
        twitter_card: select_first(document, r#"meta[name="twitter:card"]"#).is_some(),
        h1: first_text(document, "h1"),
    }
}

fn check_performance(document: &Html) -> PerfAudit {
    let mut audit = PerfAudit::default();

    for img in select_all(document, "img") {
        let attrs = img.value();
        audit.images += 1;
        if attrs.attr("loading").is_some_and(|v| v.eq_ignore_ascii_case("lazy")) {
            audit.lazy_images += 1;
        }
        if attrs.attr("width").is_some() && attrs.attr("height").is_some() {
            audit.sized_images += 1;
        }
    }

    for script in select_all(document, "script[src]") {
        let attrs = script.value();
        audit.external_scripts += 1;
        let is_module = attrs.attr("type").is_some_and(|t| t.eq_ignore_ascii_case("module"));
        if attrs.attr("defer").is_some() {
            audit.deferred_scripts += 1;
        } else if attrs.attr("async").is_none() && !is_module {
            audit.blocking_scripts += 1;
        }
    }

    audit.external_stylesheets = select_all(document, r#"link[rel="stylesheet"][href]"#)
        .filter(|link| link.value().attr("href").is_some_and(is_remote))
        .count();

    audit
}

fn select_all<'a>(document: &'a Html, css: &str) -> impl Iterator<Item = scraper::ElementRef<'a>> {
    let selector = Selector::parse(css).ok();
    selector
        .map(|s| document.select(&s).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
}

fn is_remote(href: &str) -> bool {
    let href = href.trim().to_ascii_lowercase();
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

/// Audit `pages` through `fetcher`, plus `robots.txt` and the sitemap.
pub async fn run_audit<F: PageFetcher + ?Sized>(
    fetcher: &F,
    sitemap_path: &str,
    pages: &[String],
) -> AuditReport {
    let mut report = AuditReport {
        static_files: StaticFiles {
            robots_txt: fetcher.fetch("robots.txt").await.is_ok(),
            sitemap_xml: fetcher.fetch(sitemap_path).await.is_ok(),
        },
        ..AuditReport::default()
    };

    for page in pages {
        match fetcher.fetch(page).await {
            Ok(html) => {
                tracing::debug!(page = %page, "audited page");
                report.pages.push(audit_html(page, &html));
            }
            Err(e) => {
                tracing::warn!(page = %page, error = %e, "skipping unreachable page");
                report.unreachable.push((page.clone(), e.to_string()));
            }
        }
    }

    tracing::info!(
        pages = report.pages.len(),
        unreachable = report.unreachable.len(),
        "audit finished"
    );
    report
}
