//! Care Market Search Server
//!
//! Directory and relevance search for a healthcare-professional
//! marketplace, in pure Rust with a small dependency set.
//!
//! # Features
//!
//! - **Fallback Ranking**: Offline synonym-expansion relevance scorer
//! - **Remote Scorer Seam**: Pluggable AI-backed scoring with local fallback
//! - **Thread-Safe Directory**: Lock-guarded in-memory store with JSONL persistence
//! - **Moderation**: Pending/approved/rejected lifecycle for directory entries
//! - **REST API**: Axum endpoints for listing, registration and smart search
//!
//! # Modules
//!
//! - `types`: Core data structures (Professional, Directory, ScoredProfessional)
//! - `search`: Synonym table, ranker and smart-search composition
//! - `market`: Directory engine with registration, moderation and queries
//! - `validation`: Professional category validation
//! - `utils`: Utility functions (timestamps, etc.)
//! - `api`: HTTP server and REST handlers
//!
//! # Example
//!
//! ```
//! use care_market::search::{Ranker, SynonymTable};
//! use care_market::types::Professional;
//!
//! let ranker = Ranker::new(SynonymTable::clinical_default());
//!
//! let mut p = Professional::new("p1".into(), "Bia".into(), "Psicólogo".into());
//! p.practice_areas = vec!["Ansiedade".into()];
//!
//! let results = ranker.rank("ansiedade", &[p]);
//! assert_eq!(results.len(), 1);
//! assert!(results[0].score > 0.0);
//! ```

pub mod api;
pub mod market;
pub mod search;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use market::Marketplace;
pub use search::{Ranker, RankerWeights, RemoteScorer, SmartSearch, SynonymTable};
pub use types::{
    Directory, MarketResult, ModerationStatus, Professional, ScoredProfessional,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
