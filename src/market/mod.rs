//! Marketplace store - the professional directory engine
//!
//! This module contains the directory implementation with thread-safe
//! registration, moderation, queries and search.

mod crud;
mod query;

use std::env;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use crate::search::SmartSearch;
use crate::types::{
    Directory, MarketResult, ModerationStatus, Professional, ScoredProfessional,
};

/// Marketplace with in-memory directory cache for thread-safe operations
pub struct Marketplace {
    pub(crate) data_file_path: String,
    pub(crate) directory: RwLock<Directory>,
}

impl Marketplace {
    /// Create a new marketplace instance
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_data_path = current_dir.join("market.jsonl");

        let data_file_path = match env::var("MARKET_FILE_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_data_path.to_string_lossy().to_string(),
        };

        // Load directory from file at startup (or create empty if not exists)
        let directory = Self::load_directory_from_file(&data_file_path).unwrap_or_default();

        Self {
            data_file_path,
            directory: RwLock::new(directory),
        }
    }

    /// Create a new marketplace with custom file path
    pub fn with_file_path(file_path: String) -> Self {
        let directory = Self::load_directory_from_file(&file_path).unwrap_or_default();

        Self {
            data_file_path: file_path,
            directory: RwLock::new(directory),
        }
    }

    /// Load directory from file (static helper for initialization)
    fn load_directory_from_file(file_path: &str) -> MarketResult<Directory> {
        if !Path::new(file_path).exists() {
            return Ok(Directory::default());
        }

        let content = fs::read_to_string(file_path)?;
        let mut directory = Directory::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(professional) = serde_json::from_str::<Professional>(line) {
                if !professional.id.is_empty() && !professional.category.is_empty() {
                    directory.professionals.push(professional);
                }
            }
        }

        Ok(directory)
    }

    /// Persist directory to file (internal helper, expects caller to hold lock)
    pub(crate) fn persist_to_file(&self, directory: &Directory) -> MarketResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(&self.data_file_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for professional in &directory.professionals {
            content.push_str(&serde_json::to_string(professional)?);
            content.push('\n');
        }

        fs::write(&self.data_file_path, content)?;
        Ok(())
    }

    /// Get a clone of the current directory (thread-safe read)
    pub fn load_directory(&self) -> Directory {
        self.directory.read().clone()
    }

    /// Get the data file path
    pub fn file_path(&self) -> &str {
        &self.data_file_path
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.directory.read().len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.directory.read().is_empty()
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export methods from submodules by implementing them here
impl Marketplace {
    // Registration and moderation (from crud.rs)
    pub fn register_professionals(
        &self,
        professionals: Vec<Professional>,
    ) -> MarketResult<Vec<Professional>> {
        crud::register_professionals(self, professionals)
    }

    pub fn set_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> MarketResult<Option<Professional>> {
        crud::set_status(self, id, status)
    }

    pub fn delete_professionals(&self, ids: Vec<String>) -> MarketResult<()> {
        crud::delete_professionals(self, ids)
    }

    // Query operations (from query.rs)
    pub fn list_professionals(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
        category: Option<&str>,
        status: Option<ModerationStatus>,
    ) -> (Vec<Professional>, usize) {
        query::list_professionals(self, limit, offset, category, status)
    }

    pub fn get_professional(&self, id: &str) -> Option<Professional> {
        query::get_professional(self, id)
    }

    pub fn search_professionals(
        &self,
        search: &SmartSearch,
        query_text: &str,
        limit: Option<usize>,
    ) -> Vec<ScoredProfessional> {
        query::search_professionals(self, search, query_text, limit)
    }
}
