// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo and transliteration tolerance via edit distance.
//!
//! The vocabularies here are small (a campus has hundreds of places, not
//! millions of documents), so a bounded dynamic-programming scan over each
//! field's vocabulary is all the machinery fuzzy clauses need.

mod levenshtein;

pub use levenshtein::*;
