//! Remote scorer seam with local fallback
//!
//! The AI-backed scoring service is injected as a capability so the local
//! ranker stays swappable and testable in isolation. Whenever the remote
//! call fails or comes back empty, ranking falls through to the offline
//! `Ranker`.

use crate::types::{MarketResult, Professional, ScoredProfessional};

use super::Ranker;

/// A remote service that can score search candidates
pub trait RemoteScorer: Send + Sync {
    /// Score the candidates against the query, best match first.
    /// An empty result means "no matches", not an error.
    fn score_candidates(
        &self,
        query: &str,
        candidates: &[Professional],
    ) -> MarketResult<Vec<ScoredProfessional>>;
}

/// Smart search: remote scoring when available, local ranking otherwise
pub struct SmartSearch {
    ranker: Ranker,
    remote: Option<Box<dyn RemoteScorer>>,
}

impl SmartSearch {
    /// Local-only search, no remote scorer configured
    pub fn local(ranker: Ranker) -> Self {
        Self {
            ranker,
            remote: None,
        }
    }

    /// Search backed by a remote scorer with local fallback
    pub fn with_remote(ranker: Ranker, remote: Box<dyn RemoteScorer>) -> Self {
        Self {
            ranker,
            remote: Some(remote),
        }
    }

    /// Rank candidates, preferring the remote scorer when one is set
    pub fn search(&self, query: &str, candidates: &[Professional]) -> Vec<ScoredProfessional> {
        if let Some(remote) = &self.remote {
            match remote.score_candidates(query, candidates) {
                Ok(results) if !results.is_empty() => return results,
                Ok(_) => {
                    eprintln!("[Search] Remote scorer returned no matches, using local ranking");
                }
                Err(e) => {
                    eprintln!("[Search] Remote scorer failed: {}, using local ranking", e);
                }
            }
        }

        self.ranker.rank(query, candidates)
    }
}
