// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searcher: evaluates a combined query against one index snapshot.
//!
//! Each clause resolves to vocabulary terms of its field (a contiguous range
//! for prefix clauses, a bounded scan for fuzzy ones), the terms resolve to
//! posting lists, and the accumulator folds everything into one score per
//! place. Nothing here writes to the index, so any number of searches can run
//! against the same snapshot at once.

mod accumulator;

use crate::index::PlaceIndex;
use crate::query::{compose, Clause, ComposedQuery, MatchKind};
use crate::scoring::ranking::compare_matches;
use crate::scoring::{fuzzy_score, prefix_score};
use crate::types::MatchResult;
use accumulator::{ClauseHits, ScoreAccumulator};

/// A matching place with its relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub doc_id: usize,
    pub score: f64,
    /// Number of clauses this place satisfied.
    pub matched_clauses: u32,
}

/// Per-call search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum results; `None` returns every match.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn unlimited() -> Self {
        Self { limit: None }
    }
}

/// Query executor bound to one index snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    index: &'a PlaceIndex,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a PlaceIndex) -> Self {
        Self { index }
    }

    /// Ranked matches with scores.
    pub fn search_scored(&self, query: &ComposedQuery, options: SearchOptions) -> Vec<ScoredMatch> {
        let combined = match query {
            ComposedQuery::Empty => return Vec::new(),
            ComposedQuery::Combined(combined) if combined.is_empty() => return Vec::new(),
            ComposedQuery::Combined(combined) => combined,
        };

        let mut acc = ScoreAccumulator::default();
        for clause in combined.clauses() {
            acc.add(self.evaluate(clause), clause.boost);
        }

        let mut matches = acc.into_matches();
        matches.sort_by(|a, b| compare_matches(a, b, &self.index.places));
        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }
        matches
    }

    /// Ranked matches as display records.
    pub fn search(&self, query: &ComposedQuery, options: SearchOptions) -> Vec<MatchResult> {
        self.search_scored(query, options)
            .into_iter()
            .filter_map(|m| self.index.place(m.doc_id).map(MatchResult::from))
            .collect()
    }

    /// Best score per place for a single clause.
    fn evaluate(&self, clause: &Clause) -> ClauseHits {
        let field = self.index.field(clause.field);
        let mut hits = ClauseHits::default();

        match clause.kind {
            MatchKind::Prefix => {
                let query_len = clause.text.chars().count();
                for term_idx in field.prefix_terms(&clause.text) {
                    let token_len = field.term(term_idx).map_or(query_len, |t| t.chars().count());
                    let score = prefix_score(query_len, token_len);
                    for &doc_id in field.postings(term_idx) {
                        hits.record(doc_id, score);
                    }
                }
            }
            MatchKind::Fuzzy {
                max_distance,
                prefix_len,
            } => {
                for fuzzy in field.fuzzy_terms(&clause.text, max_distance, prefix_len) {
                    let score = fuzzy_score(fuzzy.distance);
                    for &doc_id in field.postings(fuzzy.term_idx) {
                        hits.record(doc_id, score);
                    }
                }
            }
        }

        hits
    }
}

/// Execute `query` against `index`, returning every match in rank order.
pub fn search(index: &PlaceIndex, query: &ComposedQuery) -> Vec<MatchResult> {
    Searcher::new(index).search(query, SearchOptions::unlimited())
}

/// Compose `raw` with the default policy and search.
pub fn find(index: &PlaceIndex, raw: &str, options: SearchOptions) -> Vec<MatchResult> {
    Searcher::new(index).search(&compose(raw), options)
}
