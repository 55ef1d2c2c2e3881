// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The place index: one inverted index per analyzed field.
//!
//! Each field keeps a sorted vocabulary and, parallel to it, the posting list
//! of document ids that contain each term. Sorting buys prefix lookup by
//! binary search (all terms starting with `p` form one contiguous run), and
//! fuzzy lookup is a bounded scan of the same vocabulary.
//!
//! # Invariants
//!
//! 1. **VOCAB_SORTED**: `vocabulary` is strictly ascending (sorted, no duplicates)
//! 2. **ALIGNED**: `postings.len() == vocabulary.len()`
//! 3. **POSTINGS_SORTED**: each posting list is strictly ascending
//! 4. **NON_EMPTY**: every term has at least one posting
//! 5. **IN_BOUNDS**: every posting is `< places.len()`
//!
//! An index is never mutated after `build`. Rebuilding produces a new value;
//! publishing it is the catalog's job.

use crate::fuzzy::levenshtein_bounded;
use crate::types::{Place, PlaceField};
use crate::util::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// A vocabulary term within fuzzy reach of a query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyTerm {
    pub term_idx: usize,
    pub distance: u8,
}

/// Inverted index over one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldIndex {
    pub vocabulary: Vec<String>,
    pub postings: Vec<Vec<u32>>,
}

impl FieldIndex {
    /// Build from per-document token lists (document id = position).
    fn from_tokens(doc_tokens: &[Vec<String>]) -> Self {
        let mut terms: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for (doc_id, tokens) in doc_tokens.iter().enumerate() {
            for token in tokens {
                let list = terms.entry(token.as_str()).or_default();
                // Documents are visited in order, so a repeat is always the last entry
                if list.last() != Some(&(doc_id as u32)) {
                    list.push(doc_id as u32);
                }
            }
        }

        let (vocabulary, postings) = terms
            .into_iter()
            .map(|(term, list)| (term.to_string(), list))
            .unzip();
        Self { vocabulary, postings }
    }

    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Term indices whose vocabulary entries start with `prefix`.
    ///
    /// The vocabulary is sorted, so the matches are one contiguous range found
    /// by two binary searches. An empty prefix matches nothing.
    pub fn prefix_terms(&self, prefix: &str) -> Range<usize> {
        if prefix.is_empty() {
            return 0..0;
        }
        let start = self.vocabulary.partition_point(|term| term.as_str() < prefix);
        let len = self.vocabulary[start..].partition_point(|term| term.starts_with(prefix));
        start..start + len
    }

    /// Vocabulary terms within `max_distance` edits of `term`.
    ///
    /// `prefix_len` leading characters must match exactly (0 disables the
    /// constraint). Results are ordered by distance, then vocabulary order.
    pub fn fuzzy_terms(&self, term: &str, max_distance: u8, prefix_len: usize) -> Vec<FuzzyTerm> {
        if term.is_empty() {
            return Vec::new();
        }

        let required: String = term.chars().take(prefix_len).collect();
        let candidates = if required.is_empty() {
            0..self.vocabulary.len()
        } else {
            self.prefix_terms(&required)
        };

        let mut matches: Vec<FuzzyTerm> = candidates
            .filter_map(|term_idx| {
                levenshtein_bounded(term, &self.vocabulary[term_idx], max_distance as usize).map(
                    |distance| FuzzyTerm {
                        term_idx,
                        distance: distance as u8,
                    },
                )
            })
            .collect();

        matches.sort_by_key(|m| (m.distance, m.term_idx));
        matches
    }

    /// Document ids containing the term at `term_idx`.
    pub fn postings(&self, term_idx: usize) -> &[u32] {
        self.postings.get(term_idx).map_or(&[], Vec::as_slice)
    }

    pub fn term(&self, term_idx: usize) -> Option<&str> {
        self.vocabulary.get(term_idx).map(String::as_str)
    }

    fn check(&self, doc_count: usize) -> Result<(), String> {
        if self.vocabulary.len() != self.postings.len() {
            return Err(format!(
                "vocabulary has {} terms but {} posting lists",
                self.vocabulary.len(),
                self.postings.len()
            ));
        }
        if let Some(pair) = self.vocabulary.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!("vocabulary not sorted at {:?}", pair[1]));
        }
        for (term, list) in self.vocabulary.iter().zip(&self.postings) {
            if list.is_empty() {
                return Err(format!("term {:?} has no postings", term));
            }
            if list.windows(2).any(|w| w[0] >= w[1]) {
                return Err(format!("postings for {:?} not sorted", term));
            }
            if list.iter().any(|&doc| doc as usize >= doc_count) {
                return Err(format!("postings for {:?} out of bounds", term));
            }
        }
        Ok(())
    }
}

/// Immutable searchable snapshot over a fixed set of places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceIndex {
    pub places: Vec<Place>,
    pub name: FieldIndex,
    pub he_name: FieldIndex,
    pub building: FieldIndex,
}

impl PlaceIndex {
    /// Analyze every place and build the three field indexes.
    ///
    /// Total and deterministic: the same places in the same order always
    /// produce an equal index.
    pub fn build(places: Vec<Place>) -> Self {
        let analyze = |place: &Place| -> [Vec<String>; 3] {
            PlaceField::ALL.map(|field| place.field_text(field).map(tokenize).unwrap_or_default())
        };

        #[cfg(feature = "parallel")]
        let analyzed: Vec<[Vec<String>; 3]> = places.par_iter().map(analyze).collect();
        #[cfg(not(feature = "parallel"))]
        let analyzed: Vec<[Vec<String>; 3]> = places.iter().map(analyze).collect();

        let mut per_field: [Vec<Vec<String>>; 3] = Default::default();
        for fields in analyzed {
            for (slot, tokens) in per_field.iter_mut().zip(fields) {
                slot.push(tokens);
            }
        }
        let [name, he_name, building] = per_field;

        Self {
            name: FieldIndex::from_tokens(&name),
            he_name: FieldIndex::from_tokens(&he_name),
            building: FieldIndex::from_tokens(&building),
            places,
        }
    }

    pub fn field(&self, field: PlaceField) -> &FieldIndex {
        match field {
            PlaceField::Name => &self.name,
            PlaceField::HeName => &self.he_name,
            PlaceField::Building => &self.building,
        }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn place(&self, doc_id: usize) -> Option<&Place> {
        self.places.get(doc_id)
    }

    /// Total distinct terms across the three fields.
    pub fn term_count(&self) -> usize {
        PlaceField::ALL
            .iter()
            .map(|&field| self.field(field).term_count())
            .sum()
    }

    /// CRC32 over the canonical JSON encoding. Equal indexes, equal fingerprints.
    pub fn fingerprint(&self) -> u32 {
        // Serializing plain structs of strings, vectors and floats cannot fail
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        crc32fast::hash(&bytes)
    }

    /// Verify the structural invariants. Used after loading from disk, where
    /// the bytes may have been produced by something other than `build`.
    pub fn validate(&self) -> Result<(), String> {
        for field in PlaceField::ALL {
            self.field(field)
                .check(self.places.len())
                .map_err(|e| format!("{}: {}", field, e))?;
        }
        Ok(())
    }
}
