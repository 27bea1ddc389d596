//! Relevance search for the professional directory
//!
//! This module provides the search path used by the marketplace:
//! - Synonym expansion over a replaceable clinical-domain table
//! - Heuristic per-record scoring with configurable weights
//! - A remote-scorer seam with local fallback ranking

mod ranker;
mod remote;
mod synonyms;

pub use ranker::{Ranker, RankerWeights, PARALLEL_SCORE_THRESHOLD};
pub use remote::{RemoteScorer, SmartSearch};
pub use synonyms::SynonymTable;
