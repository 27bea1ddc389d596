//! Standard professional categories with validation

/// Standard professional categories for the marketplace
pub const STANDARD_CATEGORIES: &[&str] = &[
    "Médico",
    "Psicólogo",
    "Psiquiatra",
    "Nutricionista",
    "Fisioterapeuta",
    "Fonoaudiólogo",
    "Enfermeiro",
    "Dentista",
    "Terapeuta Ocupacional",
    "Educador Físico",
];

/// Check if a category is standard, return warning if not
///
/// Unknown categories are accepted - the category field is free text by
/// contract - but registration logs the warning for moderators.
pub fn validate_category(category: &str) -> Option<String> {
    let category_lower = category.to_lowercase();
    if STANDARD_CATEGORIES
        .iter()
        .any(|&c| c.to_lowercase() == category_lower)
    {
        None
    } else {
        Some(format!(
            "⚠️ Non-standard category '{}'. Recommended: {:?}",
            category, STANDARD_CATEGORIES
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_category_passes() {
        assert!(validate_category("Psicólogo").is_none());
        assert!(validate_category("psicólogo").is_none());
        assert!(validate_category("MÉDICO").is_none());
    }

    #[test]
    fn test_unknown_category_warns() {
        let warning = validate_category("Astrólogo");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("Astrólogo"));
    }
}
