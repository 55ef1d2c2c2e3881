//! Result order.

use super::common::{campus, make_index};
use locus::{compose, ComposedQuery, SearchOptions, Searcher};

fn scored(index: &locus::PlaceIndex, raw: &str) -> Vec<(String, f64)> {
    Searcher::new(index)
        .search_scored(&compose(raw), SearchOptions::unlimited())
        .into_iter()
        .map(|m| (index.places[m.doc_id].place_name.clone(), m.score))
        .collect()
}

#[test]
fn test_scores_are_non_increasing() {
    for raw in ["a", "lib", "hall", "center", "בנ", "c"] {
        let results = scored(&campus(), raw);
        for pair in results.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "{:?}: {:?}", raw, results);
        }
    }
}

#[test]
fn test_exact_token_beats_longer_prefix() {
    let index = make_index(&[("Labs", "", None), ("Lab", "", None)]);
    let results = scored(&index, "lab");
    assert_eq!(results[0].0, "Lab");
}

#[test]
fn test_prefix_beats_typo() {
    // "Hallway" matches by prefix only, "Hxl" by one edit only
    let index = make_index(&[("Hallway", "", None), ("Hal", "", None), ("Hxl", "", None)]);
    let results = scored(&index, "hal");
    let hxl = results.iter().position(|(n, _)| n == "Hxl").unwrap();
    let hallway = results.iter().position(|(n, _)| n == "Hallway").unwrap();
    assert!(hallway < hxl);
}

#[test]
fn test_more_fields_matching_ranks_higher() {
    // Both names start with "gate"; only one also has the code "g"
    let index = make_index(&[("Gate East", "", None), ("Gate West", "", Some("G"))]);
    let results = scored(&index, "gate");
    assert_eq!(results[0].0, "Gate West");
}

#[test]
fn test_equal_matches_tie_and_both_return() {
    let index = make_index(&[("Zeta Hall", "", None), ("Alpha Hall", "", None)]);
    let results = scored(&index, "hall");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].1, results[1].1);
    let mut names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Alpha Hall", "Zeta Hall"]);
}

#[test]
fn test_limit_keeps_best() {
    let all = scored(&campus(), "a");
    let top = Searcher::new(&campus()).search_scored(&compose("a"), SearchOptions::limit(2));
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].score, all[0].1);
}

#[test]
fn test_search_is_deterministic() {
    let first = scored(&campus(), "e");
    for _ in 0..5 {
        assert_eq!(scored(&campus(), "e"), first);
    }
}

#[test]
fn test_empty_composed_query_scores_nothing() {
    let results = Searcher::new(&campus()).search_scored(&ComposedQuery::Empty, SearchOptions::unlimited());
    assert!(results.is_empty());
}
