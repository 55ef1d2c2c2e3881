// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization and tokenization.
//!
//! Place names arrive in two scripts and plenty of spellings. Normalization
//! folds the cheap differences away before anything is compared:
//! - "Café" → "cafe"
//! - "בִּנְיָן" → "בנין" (Hebrew points and cantillation are combining marks)
//! - "  Main   Hall " → "main hall"
//!
//! Tokenization then splits on anything that is not alphanumeric, so
//! "Building A-1" yields `building`, `a`, `1` and "A1" stays the single token `a1`.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: strip diacritics, lowercase, collapse whitespace.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace only. Assumes pre-normalized input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks we strip. Latin diacritics plus the Hebrew point and
/// cantillation blocks, which is what shows up in campus datasets.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0591}'..='\u{05BD}' |  // Hebrew cantillation + points
        '\u{05BF}' |
        '\u{05C1}'..='\u{05C2}' |
        '\u{05C4}'..='\u{05C5}' |
        '\u{05C7}' |
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary: anything that isn't a letter or digit.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized tokens.
///
/// Order follows the text; duplicates are kept (the index dedups per field).
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Is every character of `s` part of a token? Such strings can prefix-match
/// vocabulary entries; anything else never can.
pub fn is_token_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| !is_word_boundary(c))
}
