//! Shared test utilities and fixtures.

#![allow(dead_code)]

use vitrine::fetch::parse_base;
use vitrine::{PageRecord, ScoreLimits, SiteIndexCache};
use url::Url;

// Re-export canonical test utilities from vitrine::testing
pub use vitrine::testing::{make_html, make_record, make_sitemap, sample_site, MapFetcher};

/// Base URL every fixture site lives under.
pub const BASE: &str = "https://skn.example/";

/// `BASE` parsed, for APIs that resolve links against the site root.
pub fn base() -> Url {
    parse_base(BASE).unwrap()
}

/// The two-page index used by the interior/contact scenarios.
pub fn scenario_records() -> Vec<PageRecord> {
    vec![
        make_record(
            "about.html",
            "About Us",
            "We design residential and commercial interiors.",
        ),
        make_record("contact.html", "Contact", "Reach our team."),
    ]
}

/// A ready cache holding `records` in order.
pub fn ready_cache(records: Vec<PageRecord>) -> SiteIndexCache {
    let cache = SiteIndexCache::new();
    cache.load(records);
    cache
}

pub fn limits() -> ScoreLimits {
    ScoreLimits::default()
}

/// `n` records that all match "studio" in the body only, so they tie.
pub fn tied_records(n: usize) -> Vec<PageRecord> {
    (0..n)
        .map(|i| make_record(&format!("page-{i}.html"), &format!("Page {i}"), "our studio"))
        .collect()
}

/// A fixture site served from memory: sitemap plus the scenario pages.
pub fn scenario_site() -> MapFetcher {
    MapFetcher::new()
        .with_page(
            "sitemap.xml",
            make_sitemap(BASE, &["about.html", "contact.html"]),
        )
        .with_page(
            "about.html",
            make_html("About Us", "We design residential and commercial interiors."),
        )
        .with_page("contact.html", make_html("Contact", "Reach our team."))
}
