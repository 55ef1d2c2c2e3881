// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.

use crate::search::ScoredMatch;
use crate::types::Place;
use std::cmp::Ordering;

/// Compare two scored matches for ranking.
///
/// Sort order:
/// 1. **Score** - descending, higher wins
/// 2. **Place name** - alphabetical tiebreaker for stable display
/// 3. **Doc ID** - final tiebreaker when everything else is equal
pub fn compare_matches(a: &ScoredMatch, b: &ScoredMatch, places: &[Place]) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => {
            let a_name = places.get(a.doc_id).map(|p| p.place_name.as_str()).unwrap_or("");
            let b_name = places.get(b.doc_id).map(|p| p.place_name.as_str()).unwrap_or("");
            match a_name.cmp(b_name) {
                Ordering::Equal => a.doc_id.cmp(&b.doc_id),
                ord => ord,
            }
        }
    }
}
