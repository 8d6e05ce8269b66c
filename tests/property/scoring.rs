//! Scoring invariants over random indexes.

use super::common::limits;
use proptest::prelude::*;
use vitrine::util::fold_case;
use vitrine::{score, PageRecord};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words drawn from a small alphabet so queries actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E]{1,5}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn record_strategy() -> impl Strategy<Value = PageRecord> {
    (word_strategy(), text_strategy(), text_strategy(), text_strategy()).prop_map(
        |(slug, title, description, body)| {
            PageRecord::new(format!("{slug}.html"), title, description, body)
        },
    )
}

/// Up to 40 records with unique urls, so the 12-result cap is exercised.
fn index_strategy() -> impl Strategy<Value = Vec<PageRecord>> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, mut record)| {
                record.url = format!("p{}-{}", i, record.url);
                record
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("{a} {b}")),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("{a}  {b}")),
        word_strategy().prop_map(|w| format!("  {w}\t")),
    ]
}

fn contains_folded(field: &str, needle: &str) -> bool {
    fold_case(field).contains(needle)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: a blank query never matches anything.
    #[test]
    fn prop_blank_query_is_empty(index in index_strategy(), blank in "[ \t\n]{0,4}") {
        prop_assert!(score(&blank, &index, &limits()).is_empty());
    }

    /// Property: every result contains the query in some field.
    #[test]
    fn prop_every_result_contains_query(index in index_strategy(), query in query_strategy()) {
        let needle = fold_case(query.trim());
        for result in score(&query, &index, &limits()) {
            let record = index.iter().find(|r| r.url == result.url).unwrap();
            prop_assert!(
                contains_folded(&record.title, &needle)
                    || contains_folded(&record.url, &needle)
                    || contains_folded(&record.description, &needle)
                    || contains_folded(&record.body_text, &needle),
                "{:?} does not contain {:?}", record, needle
            );
        }
    }

    /// Property: at most 12 results.
    #[test]
    fn prop_results_bounded(index in index_strategy(), query in query_strategy()) {
        prop_assert!(score(&query, &index, &limits()).len() <= 12);
    }

    /// Property: scores descend, and equal scores keep index order.
    #[test]
    fn prop_sorted_and_stable(index in index_strategy(), query in query_strategy()) {
        let results = score(&query, &index, &limits());
        let position = |url: &str| index.iter().position(|r| r.url == url).unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(position(&pair[0].url) < position(&pair[1].url));
            }
        }
    }

    /// Property: scoring is a pure function of its inputs.
    #[test]
    fn prop_idempotent(index in index_strategy(), query in query_strategy()) {
        prop_assert_eq!(score(&query, &index, &limits()), score(&query, &index, &limits()));
    }

    /// Property: every result scores above zero.
    #[test]
    fn prop_positive_scores(index in index_strategy(), query in query_strategy()) {
        for result in score(&query, &index, &limits()) {
            prop_assert!(result.score > 0.0);
        }
    }
}
