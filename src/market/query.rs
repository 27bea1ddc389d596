//! Query operations for the marketplace directory

use crate::search::SmartSearch;
use crate::types::{ModerationStatus, Professional, ScoredProfessional};

use super::Marketplace;

/// List entries with optional pagination and category/status filters
///
/// Returns the page and the total count before pagination.
pub fn list_professionals(
    market: &Marketplace,
    limit: Option<usize>,
    offset: Option<usize>,
    category: Option<&str>,
    status: Option<ModerationStatus>,
) -> (Vec<Professional>, usize) {
    let directory = market.directory.read();

    let filtered: Vec<Professional> = directory
        .professionals
        .iter()
        .filter(|p| match category {
            Some(cat) => p.category.to_lowercase() == cat.to_lowercase(),
            None => true,
        })
        .filter(|p| match status {
            Some(s) => p.status == s,
            None => true,
        })
        .cloned()
        .collect();

    let total = filtered.len();
    let offset = offset.unwrap_or(0);

    let page: Vec<Professional> = if let Some(lim) = limit {
        filtered.into_iter().skip(offset).take(lim).collect()
    } else {
        filtered.into_iter().skip(offset).collect()
    };

    (page, total)
}

/// Look up a single entry by id
pub fn get_professional(market: &Marketplace, id: &str) -> Option<Professional> {
    let directory = market.directory.read();
    directory.professionals.iter().find(|p| p.id == id).cloned()
}

/// Rank approved entries against a free-text query
///
/// Only approved entries are search candidates; pending and rejected
/// profiles never surface in the marketplace.
pub fn search_professionals(
    market: &Marketplace,
    search: &SmartSearch,
    query_text: &str,
    limit: Option<usize>,
) -> Vec<ScoredProfessional> {
    let candidates: Vec<Professional> = {
        let directory = market.directory.read();
        directory
            .professionals
            .iter()
            .filter(|p| p.status == ModerationStatus::Approved)
            .cloned()
            .collect()
    };

    let mut results = search.search(query_text, &candidates);

    if let Some(lim) = limit {
        results.truncate(lim);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Ranker, SmartSearch, SynonymTable};

    fn market_with(professionals: Vec<Professional>) -> (Marketplace, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.jsonl");
        let market = Marketplace::with_file_path(path.to_string_lossy().to_string());
        market.register_professionals(professionals).unwrap();
        (market, dir)
    }

    fn approved(market: &Marketplace, id: &str) {
        market
            .set_status(id, ModerationStatus::Approved)
            .unwrap()
            .unwrap();
    }

    fn professional(id: &str, category: &str, areas: Vec<&str>) -> Professional {
        let mut p = Professional::new(id.to_string(), id.to_string(), category.to_string());
        p.practice_areas = areas.into_iter().map(|s| s.to_string()).collect();
        p
    }

    #[test]
    fn test_list_filters_by_category_and_status() {
        let (market, _dir) = market_with(vec![
            professional("p1", "Psicólogo", vec!["Ansiedade"]),
            professional("p2", "Médico", vec!["Cardiologia"]),
            professional("p3", "Médico", vec!["Ortopedia"]),
        ]);
        approved(&market, "p2");

        let (all, total) = market.list_professionals(None, None, None, None);
        assert_eq!(total, 3);
        assert_eq!(all.len(), 3);

        let (doctors, total) = market.list_professionals(None, None, Some("médico"), None);
        assert_eq!(total, 2);
        assert!(doctors.iter().all(|p| p.category == "Médico"));

        let (approved_only, total) =
            market.list_professionals(None, None, None, Some(ModerationStatus::Approved));
        assert_eq!(total, 1);
        assert_eq!(approved_only[0].id, "p2");
    }

    #[test]
    fn test_list_pagination() {
        let (market, _dir) = market_with(vec![
            professional("p1", "Médico", vec![]),
            professional("p2", "Médico", vec![]),
            professional("p3", "Médico", vec![]),
        ]);

        let (page, total) = market.list_professionals(Some(2), Some(1), None, None);
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "p2");
    }

    #[test]
    fn test_search_only_sees_approved_entries() {
        let (market, _dir) = market_with(vec![
            professional("visible", "Psicólogo", vec!["Ansiedade"]),
            professional("hidden", "Psicólogo", vec!["Ansiedade"]),
        ]);
        approved(&market, "visible");

        let search = SmartSearch::local(Ranker::new(SynonymTable::clinical_default()));
        let results = market.search_professionals(&search, "ansiedade", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].professional.id, "visible");
    }

    #[test]
    fn test_search_respects_limit() {
        let (market, _dir) = market_with(vec![
            professional("p1", "Psicólogo", vec!["Ansiedade"]),
            professional("p2", "Psicólogo", vec!["Ansiedade"]),
            professional("p3", "Psicólogo", vec!["Ansiedade"]),
        ]);
        for id in ["p1", "p2", "p3"] {
            approved(&market, id);
        }

        let search = SmartSearch::local(Ranker::new(SynonymTable::clinical_default()));
        let results = market.search_professionals(&search, "ansiedade", Some(2));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_get_professional() {
        let (market, _dir) = market_with(vec![professional("p1", "Médico", vec![])]);
        assert!(market.get_professional("p1").is_some());
        assert!(market.get_professional("missing").is_none());
    }
}
