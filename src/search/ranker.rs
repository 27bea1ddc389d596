//! Fallback relevance ranker
//!
//! Pure, single-pass scoring used when the remote scorer is unavailable
//! or returns nothing: expand the query through the synonym table, score
//! every record against the expanded terms, drop zero scores, sort
//! descending. No I/O, no state across calls; safe to share one `Ranker`
//! across threads since the table is read-only after construction.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::types::{Professional, ScoredProfessional};

use super::SynonymTable;

/// Threshold for using parallel scoring (record count)
pub const PARALLEL_SCORE_THRESHOLD: usize = 1000;

/// Scoring weights, kept as named values so they can be tuned and tested
/// independently of the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerWeights {
    /// Term equals field value
    pub exact: f64,
    /// Field value contains the term as a substring
    pub field_contains_term: f64,
    /// Term contains the field value as a substring
    pub term_contains_field: f64,
    /// Flat bonus per matching pair for mental-health records with
    /// domain-term overlap
    pub mental_health_bonus: f64,
    /// Rating is divided by this before being added once per record
    pub rating_divisor: f64,
}

impl Default for RankerWeights {
    fn default() -> Self {
        Self {
            exact: 5.0,
            field_contains_term: 3.0,
            term_contains_field: 2.0,
            mental_health_bonus: 3.0,
            rating_divisor: 10.0,
        }
    }
}

/// Offline relevance ranker over a fixed synonym table
#[derive(Debug, Clone)]
pub struct Ranker {
    table: SynonymTable,
    weights: RankerWeights,
}

impl Ranker {
    /// Create a ranker with default weights
    pub fn new(table: SynonymTable) -> Self {
        Self {
            table,
            weights: RankerWeights::default(),
        }
    }

    /// Create a ranker with custom weights
    pub fn with_weights(table: SynonymTable, weights: RankerWeights) -> Self {
        Self { table, weights }
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    pub fn weights(&self) -> &RankerWeights {
        &self.weights
    }

    /// Expand a free-text query into a set of lowercase search terms.
    ///
    /// The query is lowercased and split on whitespace; every synonym
    /// group whose key contains, or is contained by, one of the tokens is
    /// unioned into the set. The original tokens are always kept. A blank
    /// query yields a set holding only the empty token, which callers
    /// should treat as "no meaningful terms".
    pub fn expand_query_terms(&self, query: &str) -> HashSet<String> {
        let query_lower = query.to_lowercase();
        let tokens: Vec<String> = query_lower.split_whitespace().map(str::to_string).collect();

        let mut terms: HashSet<String> = tokens.iter().cloned().collect();
        if terms.is_empty() {
            terms.insert(String::new());
            return terms;
        }

        for token in &tokens {
            for (key, related) in self.table.iter() {
                if SynonymTable::key_matches(key, token) {
                    for term in related {
                        terms.insert(term.clone());
                    }
                }
            }
        }

        terms
    }

    /// Score one record against an expanded term set.
    ///
    /// Per (term, field) pair the three substring checks are independent
    /// and cumulative: exact equality, field-contains-term, and
    /// term-contains-field can all contribute to the same pair. Records
    /// in the mental-health segment additionally earn a flat bonus on
    /// every pair that matched, provided some synonym key overlaps a term
    /// or field. The rating boost (rating / divisor) is added once per
    /// record regardless of term matches. Empty terms and empty field
    /// values are skipped so that blank queries and absent attributes
    /// contribute nothing beyond the rating floor.
    pub fn score(&self, professional: &Professional, terms: &HashSet<String>) -> f64 {
        let w = &self.weights;
        let fields = professional.searchable_fields();

        let domain_overlap = professional.is_mental_health()
            && self.table.iter().any(|(key, _)| {
                terms
                    .iter()
                    .any(|t| !t.is_empty() && SynonymTable::key_matches(key, t))
                    || fields
                        .iter()
                        .any(|f| !f.is_empty() && SynonymTable::key_matches(key, f))
            });

        let mut score = 0.0;
        for term in terms {
            if term.is_empty() {
                continue;
            }
            for field in &fields {
                if field.is_empty() {
                    continue;
                }
                let mut pair = 0.0;
                if term == field {
                    pair += w.exact;
                }
                if field.contains(term.as_str()) {
                    pair += w.field_contains_term;
                }
                if term.contains(field.as_str()) {
                    pair += w.term_contains_field;
                }
                if pair > 0.0 {
                    if domain_overlap {
                        pair += w.mental_health_bonus;
                    }
                    score += pair;
                }
            }
        }

        score + professional.rating.unwrap_or(0.0) / w.rating_divisor
    }

    /// Rank a record collection against a query.
    ///
    /// Records scoring zero are dropped. Note that the filter is literal:
    /// a record with no term relevance but a positive rating still scores
    /// rating/divisor and is kept. The sort is stable, so ties keep their
    /// input order. Input records are cloned, never mutated.
    pub fn rank(&self, query: &str, professionals: &[Professional]) -> Vec<ScoredProfessional> {
        let terms = self.expand_query_terms(query);

        let mut scored: Vec<ScoredProfessional> =
            if professionals.len() > PARALLEL_SCORE_THRESHOLD {
                professionals
                    .par_iter()
                    .map(|p| ScoredProfessional::new(p.clone(), self.score(p, &terms)))
                    .collect()
            } else {
                professionals
                    .iter()
                    .map(|p| ScoredProfessional::new(p.clone(), self.score(p, &terms)))
                    .collect()
            };

        scored.retain(|s| s.score > 0.0);
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }
}
