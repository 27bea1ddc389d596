//! Directory container type

use serde::{Deserialize, Serialize};

use super::{ModerationStatus, Professional};

/// The full professional directory held in memory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Directory {
    #[serde(default)]
    pub professionals: Vec<Professional>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.professionals.is_empty()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.professionals.len()
    }

    /// Count entries in a given moderation state
    pub fn count_by_status(&self, status: ModerationStatus) -> usize {
        self.professionals
            .iter()
            .filter(|p| p.status == status)
            .count()
    }
}
