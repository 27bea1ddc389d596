//! Category validation for directory entries

mod types;

pub use types::{validate_category, STANDARD_CATEGORIES};
