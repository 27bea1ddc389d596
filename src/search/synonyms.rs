//! Synonym table for query expansion
//!
//! The table maps a canonical domain term to its related terms. It is a
//! configuration input, not a constant: deployments can replace it with a
//! JSON file without code changes. Matching is bidirectional substring:
//! a query token relates to a key when either contains the other.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::MarketResult;

/// Mapping from canonical domain term to related terms
#[derive(Debug, Clone, Serialize, Default)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

// Manual impl so that every deserialization path lowercases keys and
// terms; mixed-case table entries would otherwise never match.
impl<'de> Deserialize<'de> for SynonymTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Ok(Self::from_entries(raw))
    }
}

impl SynonymTable {
    /// Create an empty table (expands every query to its own tokens)
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in clinical table used when no external file is configured
    pub fn clinical_default() -> Self {
        let groups: &[(&str, &[&str])] = &[
            (
                "depressão",
                &["tristeza", "melancolia", "desânimo", "apatia", "humor deprimido"],
            ),
            (
                "ansiedade",
                &["nervosismo", "pânico", "preocupação", "angústia", "medo"],
            ),
            (
                "casamento",
                &["casal", "conjugal", "relacionamento", "divórcio", "família"],
            ),
            (
                "terapia",
                &["psicoterapia", "aconselhamento", "tratamento", "sessão terapêutica"],
            ),
            ("trauma", &["estresse pós-traumático", "tept", "abuso", "luto"]),
            ("comportamento", &["comportamental", "tcc", "hábitos", "conduta"]),
            (
                "emocional",
                &["emoções", "sentimentos", "autoestima", "equilíbrio emocional"],
            ),
            ("stress", &["estresse", "esgotamento", "burnout", "tensão"]),
        ];

        let entries = groups
            .iter()
            .map(|(key, related)| {
                (
                    key.to_string(),
                    related.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();

        Self { entries }
    }

    /// Build a table from raw entries, lowercasing keys and terms
    fn from_entries(raw: BTreeMap<String, Vec<String>>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(key, related)| {
                (
                    key.to_lowercase(),
                    related.into_iter().map(|t| t.to_lowercase()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Parse a table from a JSON object of `"key": ["related", ...]` pairs.
    /// Keys and terms are lowercased on load.
    pub fn from_json_str(json: &str) -> MarketResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> MarketResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Iterate over (key, related terms) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, related)| (key.as_str(), related.as_slice()))
    }

    /// Bidirectional substring test between a lowercase token and a key
    pub fn key_matches(key: &str, token: &str) -> bool {
        token.contains(key) || key.contains(token)
    }

    /// Number of canonical keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
