// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind clause scores.
//!
//! # Key Invariants
//!
//! ```text
//! exact token    >  any proper prefix      (100 > 50 × 1.3)
//! fuzzy d        >  fuzzy d + 1            (40 > 24 > 9 > 2)
//! ```
//!
//! Clause boosts multiply the whole clause score, so the short-code clauses
//! (boost 0.4 and 0.2) add evidence without overpowering a full-term match.

/// Score for a token equal to the prefix clause text.
pub const EXACT_SCORE: f64 = 100.0;

/// Base score for a token that merely starts with the prefix clause text.
pub const PREFIX_SCORE: f64 = 50.0;

/// Length similarity bonus coefficient for prefix matches (up to 30%).
pub const PREFIX_LENGTH_BONUS_COEFFICIENT: f64 = 0.3;

/// Base scores for fuzzy matches by edit distance.
/// - Distance 0: 40.0 points
/// - Distance 1: 30.0 points
/// - Distance 2: 15.0 points
/// - Distance 3+: 5.0 points
pub const FUZZY_DISTANCE_0_SCORE: f64 = 40.0;
pub const FUZZY_DISTANCE_1_SCORE: f64 = 30.0;
pub const FUZZY_DISTANCE_2_SCORE: f64 = 15.0;
pub const FUZZY_DISTANCE_3_SCORE: f64 = 5.0;

/// Penalty per edit distance (20% per edit).
pub const FUZZY_EDIT_DISTANCE_PENALTY: f64 = 0.2;

/// Score of a prefix clause against one token (`query_len <= token_len`).
///
/// A token equal to the clause text scores `EXACT_SCORE`; longer tokens
/// score `PREFIX_SCORE` plus a bonus that shrinks as the token grows, so
/// "lib" prefers "libs" over "library".
#[inline]
pub fn prefix_score(query_len: usize, token_len: usize) -> f64 {
    if query_len == token_len {
        return EXACT_SCORE;
    }
    let length_diff = token_len.abs_diff(query_len);
    let length_bonus = 1.0 / (1.0 + length_diff as f64);
    PREFIX_SCORE * (1.0 + length_bonus * PREFIX_LENGTH_BONUS_COEFFICIENT)
}

/// Score of a fuzzy clause against a token `distance` edits away.
#[inline]
pub fn fuzzy_score(distance: u8) -> f64 {
    let base_score = match distance {
        0 => FUZZY_DISTANCE_0_SCORE,
        1 => FUZZY_DISTANCE_1_SCORE,
        2 => FUZZY_DISTANCE_2_SCORE,
        _ => FUZZY_DISTANCE_3_SCORE,
    };
    let penalty = (1.0 - f64::from(distance) * FUZZY_EDIT_DISTANCE_PENALTY).max(0.0);
    base_score * penalty
}
