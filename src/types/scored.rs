//! Scored search result type

use serde::{Deserialize, Serialize};

use super::Professional;

/// A professional paired with its computed relevance score.
///
/// Exists only for the duration of one search call; the record itself is a
/// clone of the directory entry, never an in-place edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProfessional {
    #[serde(flatten)]
    pub professional: Professional,
    /// Relevance score, > 0 for every returned result
    #[serde(rename = "matchScore")]
    pub score: f64,
}

impl ScoredProfessional {
    pub fn new(professional: Professional, score: f64) -> Self {
        Self { professional, score }
    }
}
