//! Quick local fallback over the loaded page.

use super::common::{base, limits, ready_cache};
use vitrine::quick_search;
use vitrine::scoring::ranking::merge_ranked;
use vitrine::search::quick::page_records;
use vitrine::{score, PageRecord};

const HOME: &str = r##"<!DOCTYPE html>
<html><head><title>SKN Interior Solutions</title></head>
<body>
  <nav>
    <a href="index.html">Home</a>
    <a href="services.html">Our Services</a>
    <a href="projects/project-clark.html">Clark Residence</a>
    <a href="https://instagram.com/skn">Instagram</a>
    <a href="mailto:hello@skn.example">Email us</a>
    <a href="#top">Back to top</a>
  </nav>
  <p>Interiors for homes and showrooms.</p>
</body></html>"##;

#[test]
fn test_services_link_found_before_index_is_ready() {
    let results = quick_search(&base(), "index.html", HOME, "service", &limits());
    assert!(
        results
            .iter()
            .any(|r| r.url == "services.html" && r.title == "Our Services"),
        "{:?}",
        results
    );
}

#[test]
fn test_external_and_non_page_links_skipped() {
    let urls: Vec<String> = page_records(&base(), "index.html", HOME)
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(
        urls,
        vec!["index.html", "services.html", "projects/project-clark.html"]
    );
}

#[test]
fn test_relative_links_from_nested_page() {
    let html = r#"<a href="../services.html">Services</a><a href="project-aerocity.html">Aerocity</a>"#;
    let urls: Vec<String> = page_records(&base(), "projects/project-clark.html", html)
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert!(urls.contains(&"services.html".to_string()));
    assert!(urls.contains(&"projects/project-aerocity.html".to_string()));
}

#[test]
fn test_absolute_link_to_the_site_is_kept() {
    let html = r#"<nav><a href="https://skn.example/services.html">Our Services</a></nav>"#;
    let results = quick_search(&base(), "index.html", html, "service", &limits());
    assert!(results.iter().any(|r| r.url == "services.html"), "{:?}", results);
}

#[test]
fn test_merge_prefers_index_results() {
    let cache = ready_cache(vec![PageRecord::new(
        "services.html",
        "Our Services",
        "What we do",
        "Space planning and turnkey fit-outs.",
    )]);
    let indexed = score("service", cache.get().records(), &limits());
    let local = quick_search(&base(), "index.html", HOME, "service", &limits());
    let merged = merge_ranked(indexed.clone(), local, 12);

    let services: Vec<_> = merged.iter().filter(|r| r.url == "services.html").collect();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].snippet, indexed[0].snippet);
}

#[test]
fn test_empty_query_scans_nothing() {
    assert!(quick_search(&base(), "index.html", HOME, "  ", &limits()).is_empty());
}
