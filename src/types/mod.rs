//! Data types for the Care Market server
//!
//! This module contains all the core data structures used throughout the application.

mod directory;
mod professional;
mod scored;

pub use directory::Directory;
pub use professional::{ModerationStatus, Professional};
pub use scored::ScoredProfessional;

/// Result type for marketplace operations
pub type MarketResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u64) -> bool {
    *val == 0
}
