//! `HttpFetcher` against a local mock server.

use super::common::{make_html, make_sitemap};
use mockito::Server;
use vitrine::{Crawler, FetchError, HttpFetcher, PageFetcher, SearchConfig, SiteIndexCache};

fn base(server: &Server) -> String {
    format!("{}/", server.url())
}

#[tokio::test]
async fn test_fetch_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/about.html")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(make_html("About Us", "We design interiors."))
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&base(&server), &SearchConfig::default()).unwrap();
    let html = fetcher.fetch("about.html").await.unwrap();

    assert!(html.contains("<title>About Us</title>"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_2xx_is_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gone.html")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&base(&server), &SearchConfig::default()).unwrap();
    let err = fetcher.fetch("gone.html").await.unwrap_err();

    assert!(matches!(err, FetchError::Unavailable(_)));
}

#[tokio::test]
async fn test_cross_origin_never_requested() {
    let server = Server::new_async().await;
    let fetcher = HttpFetcher::new(&base(&server), &SearchConfig::default()).unwrap();

    let err = fetcher
        .fetch("https://elsewhere.example/about.html")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::CrossOrigin(_)));
}

#[tokio::test]
async fn test_invalid_base_rejected() {
    let err = HttpFetcher::new("not a url", &SearchConfig::default()).unwrap_err();
    assert!(matches!(err, FetchError::InvalidBase(_)));
}

#[tokio::test]
async fn test_crawl_over_http_skips_server_errors() {
    let mut server = Server::new_async().await;
    let site = base(&server);
    server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(make_sitemap(&site, &["about.html", "broken.html", "contact.html"]))
        .create_async()
        .await;
    server
        .mock("GET", "/about.html")
        .with_status(200)
        .with_body(make_html("About Us", "We design residential and commercial interiors."))
        .create_async()
        .await;
    server
        .mock("GET", "/broken.html")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/contact.html")
        .with_status(200)
        .with_body(make_html("Contact", "Reach our team."))
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&site, &SearchConfig::default()).unwrap();
    let base = fetcher.base().clone();
    let cache = SiteIndexCache::new();
    let report = Crawler::new(fetcher, base, "sitemap.xml").crawl(&cache).await;

    assert_eq!(report.indexed, 2);
    assert_eq!(cache.len(), 2);
    assert!(cache.is_ready());
}
