//! Searcher properties.

use super::common::campus;
use locus::util::tokenize;
use locus::{build_index, compose, search, Center, Place, SearchOptions, Searcher};
use proptest::prelude::*;

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{3,8}( [a-z]{3,8})?", 1..15)
}

proptest! {
    /// Arbitrary input never panics and never returns more than the index holds.
    #[test]
    fn prop_any_query_is_safe(raw in "\\PC{0,80}") {
        let index = campus();
        prop_assert!(search(&index, &compose(&raw)).len() <= index.len());
    }

    /// Typing the start of a place's first word always finds that place.
    #[test]
    fn prop_prefix_of_name_finds_place(names in arb_names(), pick in any::<prop::sample::Index>(), cut in 1usize..4) {
        let places: Vec<Place> = names
            .iter()
            .map(|n| Place::new(n.as_str(), "", None, Center(34.8, 32.1)))
            .collect();
        let index = build_index(places);

        let target = pick.get(&names);
        let first = tokenize(target).remove(0);
        let prefix: String = first.chars().take(cut).collect();

        let results = search(&index, &compose(&prefix));
        prop_assert!(results.iter().any(|r| &r.place_name == target));
    }

    /// Scores never increase down the result list.
    #[test]
    fn prop_results_sorted_by_score(raw in "[a-z0-9 ]{1,10}") {
        let index = campus();
        let results = Searcher::new(&index).search_scored(&compose(&raw), SearchOptions::unlimited());
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// A limit only cuts the tail.
    #[test]
    fn prop_limit_is_a_prefix(raw in "[a-z]{1,6}", limit in 0usize..8) {
        let index = campus();
        let searcher = Searcher::new(&index);
        let all = searcher.search_scored(&compose(&raw), SearchOptions::unlimited());
        let limited = searcher.search_scored(&compose(&raw), SearchOptions::limit(limit));
        prop_assert_eq!(&all[..limited.len()], &limited[..]);
        prop_assert_eq!(limited.len(), all.len().min(limit));
    }
}
