//! Ranking order, limits and tie-breaking.

use super::common::{limits, make_record, ready_cache, tied_records};
use vitrine::scoring::{BODY_MATCH_SCORE, TITLE_MATCH_SCORE};
use vitrine::{score, ScoreLimits};

#[test]
fn test_results_capped_at_twelve() {
    let cache = ready_cache(tied_records(30));
    let results = score("studio", cache.get().records(), &limits());
    assert_eq!(results.len(), 12);
}

#[test]
fn test_custom_limit() {
    let cache = ready_cache(tied_records(30));
    let limits = ScoreLimits {
        max_results: 3,
        ..ScoreLimits::default()
    };
    assert_eq!(score("studio", cache.get().records(), &limits).len(), 3);
}

#[test]
fn test_oversized_limit_still_capped_at_twelve() {
    let cache = ready_cache(tied_records(30));
    let limits = ScoreLimits {
        max_results: 50,
        ..ScoreLimits::default()
    };
    assert_eq!(score("studio", cache.get().records(), &limits).len(), 12);
}

#[test]
fn test_ties_keep_insertion_order() {
    let cache = ready_cache(tied_records(5));
    let urls: Vec<_> = score("studio", cache.get().records(), &limits())
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(
        urls,
        vec!["page-0.html", "page-1.html", "page-2.html", "page-3.html", "page-4.html"]
    );
}

#[test]
fn test_recrawled_page_keeps_its_position() {
    let cache = ready_cache(tied_records(3));
    cache.put(make_record("page-0.html", "Page 0 (updated)", "our studio"));

    let results = score("studio", cache.get().records(), &limits());
    assert_eq!(results[0].url, "page-0.html");
    assert_eq!(results[0].title, "Page 0 (updated)");
}

#[test]
fn test_scores_descend() {
    let cache = ready_cache(vec![
        make_record("a.html", "Notes", "a kitchen remodel"),
        make_record("kitchens.html", "Kitchens", "kitchen design"),
        make_record("b.html", "Kitchen ideas", "none here"),
    ]);
    let results = score("kitchen", cache.get().records(), &limits());

    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "{:?}", results);
    }
    // Title + prefix + url + body beats title + prefix beats body alone.
    assert_eq!(results[0].url, "kitchens.html");
    assert_eq!(results[2].url, "a.html");
}

#[test]
fn test_earlier_body_match_scores_higher() {
    let cache = ready_cache(vec![
        make_record("late.html", "Late", "one two three four five six seven eight nine marble"),
        make_record("early.html", "Early", "marble one two three four five six seven eight nine"),
    ]);
    let results = score("marble", cache.get().records(), &limits());

    assert_eq!(results[0].url, "early.html");
    assert!(results[0].score > results[1].score);
    assert!(results[1].score >= BODY_MATCH_SCORE);
    assert!(results[0].score < TITLE_MATCH_SCORE);
}
