//! Professional record types for the marketplace directory

use serde::{Deserialize, Serialize};

use super::is_zero;

/// Moderation state of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Parse from the lowercase wire form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One directory entry representing a healthcare professional
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    /// Free-text professional type, e.g. "Médico", "Psicólogo"
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    #[serde(rename = "practiceAreas", default, skip_serializing_if = "Vec::is_empty")]
    pub practice_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postgraduate: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Average review score, 0.0-5.0, absent until the first review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(rename = "createdAt", default, skip_serializing_if = "is_zero")]
    pub created_at: u64,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "is_zero")]
    pub updated_at: u64,
}

impl Professional {
    /// Create a new pending professional with default values
    pub fn new(id: String, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            specializations: Vec::new(),
            practice_areas: Vec::new(),
            courses: Vec::new(),
            postgraduate: Vec::new(),
            description: None,
            rating: None,
            status: ModerationStatus::Pending,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Flattened, lowercased text attributes considered during scoring:
    /// category, practice areas, specializations, description, courses,
    /// postgraduate entries. Absent fields contribute nothing.
    pub fn searchable_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(
            1 + self.practice_areas.len()
                + self.specializations.len()
                + self.courses.len()
                + self.postgraduate.len()
                + usize::from(self.description.is_some()),
        );

        fields.push(self.category.to_lowercase());
        fields.extend(self.practice_areas.iter().map(|s| s.to_lowercase()));
        fields.extend(self.specializations.iter().map(|s| s.to_lowercase()));
        if let Some(desc) = &self.description {
            fields.push(desc.to_lowercase());
        }
        fields.extend(self.courses.iter().map(|s| s.to_lowercase()));
        fields.extend(self.postgraduate.iter().map(|s| s.to_lowercase()));

        fields
    }

    /// Whether the entry belongs to the mental-health segment: category
    /// or any practice area contains "psico" (case- and accent-insensitive,
    /// so "Psicólogo" qualifies)
    pub fn is_mental_health(&self) -> bool {
        fold_diacritics(&self.category.to_lowercase()).contains("psico")
            || self
                .practice_areas
                .iter()
                .any(|a| fold_diacritics(&a.to_lowercase()).contains("psico"))
    }
}

/// Strip Portuguese diacritics from already-lowercased text
fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}
