//! A crawl never fails as a whole: bad pages are skipped, a bad sitemap gives
//! an empty (but ready) index.

use super::common::{make_html, make_sitemap, scenario_site, MapFetcher, BASE};
use vitrine::fetch::parse_base;
use vitrine::{Crawler, SiteIndexCache};

fn crawler(fetcher: MapFetcher) -> Crawler<MapFetcher> {
    Crawler::new(fetcher, parse_base(BASE).unwrap(), "sitemap.xml")
}

#[tokio::test]
async fn test_one_unreachable_two_reachable() {
    let fetcher = MapFetcher::new()
        .with_page(
            "sitemap.xml",
            make_sitemap(BASE, &["about.html", "broken.html", "contact.html"]),
        )
        .with_page("about.html", make_html("About Us", "We design interiors."))
        .with_page("contact.html", make_html("Contact", "Reach our team."));
    let cache = SiteIndexCache::new();

    let report = crawler(fetcher).crawl(&cache).await;

    assert_eq!(cache.len(), 2);
    assert!(cache.is_ready());
    let index = cache.get();
    assert!(index.get("about.html").is_some());
    assert!(index.get("contact.html").is_some());
    assert!(index.get("broken.html").is_none());
    assert_eq!(report.skipped.len(), 1);
}

#[tokio::test]
async fn test_off_origin_sitemap_entries_not_fetched() {
    let sitemap = r#"<urlset>
        <url><loc>https://skn.example/about.html</loc></url>
        <url><loc>https://elsewhere.example/about.html</loc></url>
    </urlset>"#;
    let fetcher = MapFetcher::new()
        .with_page("sitemap.xml", sitemap)
        .with_page("about.html", make_html("About Us", "We design interiors."));
    let crawler = crawler(fetcher);
    let cache = SiteIndexCache::new();

    let report = crawler.crawl(&cache).await;

    assert_eq!(report.listed, 1);
    assert_eq!(crawler.fetcher().requests(), vec!["sitemap.xml", "about.html"]);
}

#[tokio::test]
async fn test_root_entry_indexed_as_index_html() {
    let fetcher = MapFetcher::new()
        .with_page("sitemap.xml", make_sitemap(BASE, &[""]))
        .with_page("index.html", make_html("SKN Interior Solutions", "Welcome."));
    let cache = SiteIndexCache::new();

    crawler(fetcher).crawl(&cache).await;

    assert_eq!(cache.get().records()[0].url, "index.html");
}

#[tokio::test]
async fn test_unreachable_sitemap() {
    let cache = SiteIndexCache::new();
    let report = crawler(MapFetcher::new()).crawl(&cache).await;

    assert!(cache.is_ready());
    assert!(cache.is_empty());
    assert!(report.sitemap_error.is_some());
}

#[tokio::test]
async fn test_recrawl_replaces_records() {
    let cache = SiteIndexCache::new();
    crawler(scenario_site()).crawl(&cache).await;

    let updated = scenario_site().with_page(
        "about.html",
        make_html("About SKN", "Two decades of interiors."),
    );
    crawler(updated).crawl(&cache).await;

    let index = cache.get();
    assert_eq!(index.len(), 2);
    assert_eq!(index.records()[0].title, "About SKN");
}
