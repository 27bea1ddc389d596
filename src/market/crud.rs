//! Registration and moderation operations for the marketplace

use std::collections::HashSet;

use crate::types::{MarketResult, ModerationStatus, Professional};
use crate::utils::time::current_timestamp;
use crate::validation::validate_category;

use super::Marketplace;

/// Register new professionals (thread-safe: holds write lock during entire operation)
///
/// Entries with an already-registered id are skipped. Every accepted entry
/// starts in the pending moderation state regardless of the submitted one.
pub fn register_professionals(
    market: &Marketplace,
    professionals: Vec<Professional>,
) -> MarketResult<Vec<Professional>> {
    let mut directory = market.directory.write();
    let mut existing_ids: HashSet<String> =
        directory.professionals.iter().map(|p| p.id.clone()).collect();
    let now = current_timestamp();

    let mut registered = Vec::new();
    for mut professional in professionals {
        if professional.id.is_empty() || professional.category.is_empty() {
            continue;
        }
        // Track accepted ids so duplicates within one batch are skipped too
        if existing_ids.insert(professional.id.clone()) {
            if let Some(warning) = validate_category(&professional.category) {
                eprintln!("[Registry] {}", warning);
            }
            professional.status = ModerationStatus::Pending;
            professional.created_at = now;
            professional.updated_at = now;
            registered.push(professional.clone());
            directory.professionals.push(professional);
        }
    }

    market.persist_to_file(&directory)?;
    Ok(registered)
}

/// Update the moderation status of an entry (thread-safe)
///
/// Returns the updated entry, or None when the id is unknown.
pub fn set_status(
    market: &Marketplace,
    id: &str,
    status: ModerationStatus,
) -> MarketResult<Option<Professional>> {
    let mut directory = market.directory.write();

    let updated = match directory.professionals.iter_mut().find(|p| p.id == id) {
        Some(professional) => {
            professional.status = status;
            professional.updated_at = current_timestamp();
            Some(professional.clone())
        }
        None => None,
    };

    if updated.is_some() {
        market.persist_to_file(&directory)?;
    }
    Ok(updated)
}

/// Delete entries by id (thread-safe: holds write lock during entire operation)
pub fn delete_professionals(market: &Marketplace, ids: Vec<String>) -> MarketResult<()> {
    let mut directory = market.directory.write();
    let ids_to_delete: HashSet<String> = ids.into_iter().collect();

    directory
        .professionals
        .retain(|p| !ids_to_delete.contains(&p.id));

    market.persist_to_file(&directory)?;
    Ok(())
}
