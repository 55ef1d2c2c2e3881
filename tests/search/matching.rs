//! Which places a query finds.

use super::common::{campus, make_index};
use locus::search::find;
use locus::{compose, search, SearchOptions};

fn names(raw: &str) -> Vec<String> {
    search(&campus(), &compose(raw))
        .into_iter()
        .map(|r| r.place_name)
        .collect()
}

// ============================================================================
// PREFIX
// ============================================================================

#[test]
fn test_name_prefix_finds_place() {
    assert_eq!(names("Libr").first().map(String::as_str), Some("Library"));
}

#[test]
fn test_prefix_of_second_word() {
    assert_eq!(names("hall").first().map(String::as_str), Some("Main Hall"));
}

#[test]
fn test_case_does_not_matter() {
    assert_eq!(names("LIBRARY"), names("library"));
}

#[test]
fn test_hebrew_prefix() {
    assert_eq!(names("אול").first().map(String::as_str), Some("Main Hall"));
}

#[test]
fn test_hebrew_niqqud_is_ignored() {
    let index = make_index(&[("Library", "סִפְרִיָּה", Some("A1"))]);
    let results = search(&index, &compose("ספריה"));
    assert_eq!(results.len(), 1);
}

// ============================================================================
// FUZZY
// ============================================================================

#[test]
fn test_typo_within_three_edits() {
    assert_eq!(names("Libary").first().map(String::as_str), Some("Library"));
    assert_eq!(names("cafetiria").first().map(String::as_str), Some("Cafeteria"));
}

#[test]
fn test_too_many_edits_misses() {
    assert!(!names("xyzwvut").contains(&"Library".to_string()));
}

// ============================================================================
// BUILDING CODES
// ============================================================================

#[test]
fn test_building_code_variants() {
    for raw in ["A1", "a1", "a", "A"] {
        assert!(
            names(raw).contains(&"Library".to_string()),
            "{:?} should find Library (A1)",
            raw
        );
    }
}

#[test]
fn test_longer_input_still_finds_code() {
    // "A12" is no prefix of "a1", but the 2-char code clause is
    assert_eq!(names("A12").first().map(String::as_str), Some("Library"));
}

#[test]
fn test_numeric_code() {
    let index = make_index(&[("Dorms", "מעונות", Some("12")), ("Gym", "", Some("3"))]);
    let results = find(&index, "12", SearchOptions::unlimited());
    assert_eq!(results[0].place_name, "Dorms");
}

#[test]
fn test_place_without_building_still_searchable() {
    let results = search(&campus(), &compose("sports"));
    assert_eq!(results[0].place_name, "Sports Field");
    assert_eq!(results[0].place_building, None);
}
