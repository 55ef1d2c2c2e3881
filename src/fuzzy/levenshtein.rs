// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so two strings whose
//! lengths differ by more than the bound are rejected before any DP row is
//! allocated. Inside the DP, once every cell of a row exceeds the bound the
//! final distance must too, and the scan stops.
//!
//! Distances count Unicode scalar values, not bytes. A Hebrew letter is one
//! edit, not two.

/// Edit distance between `a` and `b` if it is at most `max`, otherwise `None`.
///
/// Insertions, deletions and substitutions each cost one.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }
    if a_len == 0 || b_len == 0 {
        return Some(a_len.max(b_len));
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a_chars.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&d| d <= max)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}
