// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! OR-semantics score accumulation.
//!
//! Every clause reports at most one score per document (its best token).
//! Those are summed across clauses. No clause is required, so a document
//! enters the result set the moment any clause touches it.

use super::ScoredMatch;
use std::collections::HashMap;

/// Best score per document for a single clause.
#[derive(Debug, Default)]
pub(crate) struct ClauseHits {
    best: HashMap<u32, f64>,
}

impl ClauseHits {
    pub(crate) fn record(&mut self, doc_id: u32, score: f64) {
        self.best
            .entry(doc_id)
            .and_modify(|s| *s = s.max(score))
            .or_insert(score);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}

/// Running totals across all clauses of a combined query.
#[derive(Debug, Default)]
pub(crate) struct ScoreAccumulator {
    totals: HashMap<u32, (f64, u32)>,
}

impl ScoreAccumulator {
    pub(crate) fn add(&mut self, hits: ClauseHits, boost: f64) {
        for (doc_id, score) in hits.best {
            let entry = self.totals.entry(doc_id).or_insert((0.0, 0));
            entry.0 += score * boost;
            entry.1 += 1;
        }
    }

    pub(crate) fn into_matches(self) -> Vec<ScoredMatch> {
        self.totals
            .into_iter()
            .map(|(doc_id, (score, matched_clauses))| ScoredMatch {
                doc_id: doc_id as usize,
                score,
                matched_clauses,
            })
            .collect()
    }
}
