//! End-to-end query scenarios against small fixture indexes.

use super::common::{limits, ready_cache, sample_site, scenario_records};
use vitrine::{parse_page, score, SiteIndexCache};

#[test]
fn test_interior_matches_only_about_page() {
    let cache = ready_cache(scenario_records());
    let results = score("interior", cache.get().records(), &limits());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "about.html");
    assert!(
        results[0].snippet.contains("interiors"),
        "snippet should show the match: {:?}",
        results[0].snippet
    );
}

#[test]
fn test_unknown_word_returns_nothing() {
    let cache = ready_cache(sample_site());
    assert!(score("zzznotfound", cache.get().records(), &limits()).is_empty());
}

#[test]
fn test_blank_query_returns_nothing() {
    let cache = ready_cache(sample_site());
    for query in ["", "   ", "\t\n"] {
        assert!(score(query, cache.get().records(), &limits()).is_empty());
    }
}

#[test]
fn test_query_is_case_insensitive_and_trimmed() {
    let cache = ready_cache(scenario_records());
    let lower = score("interior", cache.get().records(), &limits());
    let shouted = score("  INTERIOR ", cache.get().records(), &limits());
    assert_eq!(lower, shouted);
}

#[test]
fn test_url_only_match() {
    let cache = ready_cache(sample_site());
    let results = score("showrooms.html", cache.get().records(), &limits());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "commercial-showrooms.html");
}

#[test]
fn test_title_match_beats_body_match() {
    let cache = ready_cache(sample_site());
    let results = score("services", cache.get().records(), &limits());
    assert_eq!(results[0].url, "services.html");
}

#[test]
fn test_partial_index_is_searchable() {
    let cache = SiteIndexCache::new();
    cache.put(parse_page(
        "services.html",
        "<html><head><title>Our Services</title></head><body><p>Space planning.</p></body></html>",
    ));

    assert!(!cache.is_ready());
    let results = score("planning", cache.get().records(), &limits());
    assert_eq!(results[0].url, "services.html");
}

#[test]
fn test_description_snippet_when_body_does_not_match() {
    let cache = ready_cache(sample_site());
    let results = score("showrooms", cache.get().records(), &limits());
    let home = results
        .iter()
        .find(|r| r.url == "index.html")
        .expect("home page mentions showrooms in its description");
    assert!(home.snippet.starts_with("Interior design studio"));
}
