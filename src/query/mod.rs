// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query composition: one raw string in, a list of OR-ed clauses out.
//!
//! A clause is a single field-level condition, either "some token of this
//! field starts with X" or "some token of this field is within k edits of X".
//! For a one-word query the composer emits eight clauses:
//!
//! ```text
//!  1. place_name      prefix  q        5. place_he_name   fuzzy   q ~3
//!  2. place_he_name   prefix  q        6. place_building  fuzzy   q ~3
//!  3. place_building  prefix  q        7. place_building  prefix  q[..2]
//!  4. place_name      fuzzy   q ~3     8. place_building  prefix  q[..1]
//! ```
//!
//! Clauses 7 and 8 exist because building codes are one or two characters
//! ("A1", "C"). Typing "A12" or "a-1" should still surface building A1, and
//! neither the whole-query prefix nor the fuzzy clause reliably does that.
//!
//! Clauses are data, never query-language text. There is no grammar for user
//! input to break out of: `*`, `:`, `"` and friends are just characters, and
//! since they are not alphanumeric they can never be part of a token.

use crate::types::PlaceField;
use crate::util::normalize::{is_token_text, normalize, tokenize};
use std::fmt;

/// Default maximum edit distance for fuzzy clauses.
pub const DEFAULT_MAX_EDIT_DISTANCE: u8 = 3;

/// Queries are cut to this many characters before composition.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 256;

/// Boost for the two-character building-code clause.
pub const SHORT_CODE_2_BOOST: f64 = 0.4;

/// Boost for the one-character building-code clause.
pub const SHORT_CODE_1_BOOST: f64 = 0.2;

/// How a clause matches a field token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Token starts with the clause text.
    Prefix,
    /// Token is within `max_distance` edits of the clause text, sharing its
    /// first `prefix_len` characters.
    Fuzzy { max_distance: u8, prefix_len: usize },
}

/// A single field-level match condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: PlaceField,
    /// Normalized clause text; always non-empty.
    pub text: String,
    pub kind: MatchKind,
    pub boost: f64,
}

impl Clause {
    pub fn prefix(field: PlaceField, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
            kind: MatchKind::Prefix,
            boost: 1.0,
        }
    }

    pub fn fuzzy(field: PlaceField, text: impl Into<String>, max_distance: u8, prefix_len: usize) -> Self {
        Self {
            field,
            text: text.into(),
            kind: MatchKind::Fuzzy {
                max_distance,
                prefix_len,
            },
            boost: 1.0,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Prefix => write!(f, "{}:{}*", self.field, self.text)?,
            MatchKind::Fuzzy { max_distance, .. } => {
                write!(f, "{}:{}~{}", self.field, self.text, max_distance)?
            }
        }
        if (self.boost - 1.0).abs() > f64::EPSILON {
            write!(f, "^{}", self.boost)?;
        }
        Ok(())
    }
}

/// OR-combination of clauses. A document matching any clause is a hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedQuery {
    clauses: Vec<Clause>,
}

impl CombinedQuery {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for CombinedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Composer output. `Empty` means the searcher must not touch the index.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposedQuery {
    Empty,
    Combined(CombinedQuery),
}

impl ComposedQuery {
    pub fn is_empty(&self) -> bool {
        match self {
            ComposedQuery::Empty => true,
            ComposedQuery::Combined(query) => query.is_empty(),
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        match self {
            ComposedQuery::Empty => &[],
            ComposedQuery::Combined(query) => query.clauses(),
        }
    }
}

/// Knobs of the composition policy.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPolicy {
    pub max_edit_distance: u8,
    /// Leading characters a fuzzy match must share with the query term.
    pub fuzzy_prefix_len: usize,
    /// Truncated building-code prefixes as `(chars, boost)`, longest first.
    pub short_code_prefixes: Vec<(usize, f64)>,
    pub max_query_chars: usize,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            fuzzy_prefix_len: 0,
            short_code_prefixes: vec![(2, SHORT_CODE_2_BOOST), (1, SHORT_CODE_1_BOOST)],
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}

/// Turns raw user input into a `ComposedQuery`.
#[derive(Debug, Clone, Default)]
pub struct QueryComposer {
    policy: QueryPolicy,
}

impl QueryComposer {
    pub fn new(policy: QueryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &QueryPolicy {
        &self.policy
    }

    /// Compose the OR query for `raw`.
    ///
    /// Never fails: over-long input is truncated, and characters that cannot
    /// appear in a token simply produce fewer clauses.
    pub fn compose(&self, raw: &str) -> ComposedQuery {
        if raw.is_empty() {
            return ComposedQuery::Empty;
        }

        let raw = truncate_chars(raw, self.policy.max_query_chars);
        let terms = distinct_terms(raw);
        let mut clauses = Vec::with_capacity(terms.len() * 6 + self.policy.short_code_prefixes.len());

        for term in &terms {
            for field in PlaceField::ALL {
                clauses.push(Clause::prefix(field, term.as_str()));
            }
        }
        for term in &terms {
            for field in PlaceField::ALL {
                clauses.push(Clause::fuzzy(
                    field,
                    term.as_str(),
                    self.policy.max_edit_distance,
                    self.policy.fuzzy_prefix_len,
                ));
            }
        }

        let normalized = normalize(raw);
        let available = normalized.chars().count();
        for &(len, boost) in &self.policy.short_code_prefixes {
            if len == 0 || available < len {
                continue;
            }
            let code: String = normalized.chars().take(len).collect();
            if is_token_text(&code) {
                clauses.push(Clause::prefix(PlaceField::Building, code).with_boost(boost));
            }
        }

        let query = CombinedQuery::new(clauses);
        tracing::debug!(clauses = query.len(), query = %query, "composed query");
        ComposedQuery::Combined(query)
    }
}

/// Compose with the default policy.
pub fn compose(raw: &str) -> ComposedQuery {
    QueryComposer::default().compose(raw)
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            tracing::debug!(max_chars, "query truncated");
            &s[..byte_idx]
        }
        None => s,
    }
}

/// Query tokens in first-seen order, without repeats.
fn distinct_terms(raw: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in tokenize(raw) {
        if !terms.contains(&token) {
            terms.push(token);
        }
    }
    terms
}
