//! Integration tests for the Care Market server

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use care_market::market::Marketplace;
use care_market::search::{Ranker, RemoteScorer, SmartSearch, SynonymTable};
use care_market::types::{MarketResult, ModerationStatus, Professional, ScoredProfessional};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn setup_test_market() -> (Marketplace, String) {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_file = format!("test_market_{}_{}.jsonl", std::process::id(), id);

    let market = Marketplace::with_file_path(temp_file.clone());
    (market, temp_file)
}

fn cleanup(file_path: &str) {
    let _ = fs::remove_file(file_path);
}

fn psychologist(id: &str, areas: Vec<&str>, rating: Option<f64>) -> Professional {
    let mut p = Professional::new(id.to_string(), format!("Dr. {}", id), "Psicólogo".to_string());
    p.practice_areas = areas.into_iter().map(|s| s.to_string()).collect();
    p.rating = rating;
    p
}

fn local_search() -> SmartSearch {
    SmartSearch::local(Ranker::new(SynonymTable::clinical_default()))
}

#[test]
fn test_register_professionals() {
    let (market, temp_file) = setup_test_market();

    let registered = market
        .register_professionals(vec![
            psychologist("ana", vec!["Ansiedade"], None),
            psychologist("bia", vec!["Terapia de Casal"], None),
        ])
        .unwrap();
    assert_eq!(registered.len(), 2);

    // Registration forces the pending state and stamps timestamps
    assert!(registered
        .iter()
        .all(|p| p.status == ModerationStatus::Pending && p.created_at > 0));

    let (all, total) = market.list_professionals(None, None, None, None);
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    cleanup(&temp_file);
}

#[test]
fn test_register_skips_duplicate_ids() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![psychologist("ana", vec![], None)])
        .unwrap();
    let second = market
        .register_professionals(vec![psychologist("ana", vec![], None)])
        .unwrap();

    assert!(second.is_empty());
    assert_eq!(market.len(), 1);

    cleanup(&temp_file);
}

#[test]
fn test_register_skips_duplicates_within_batch() {
    let (market, temp_file) = setup_test_market();

    // Same id twice in a single call: only the first entry is accepted
    let registered = market
        .register_professionals(vec![
            psychologist("ana", vec!["Ansiedade"], None),
            psychologist("ana", vec!["Trauma"], None),
        ])
        .unwrap();

    assert_eq!(registered.len(), 1);
    assert_eq!(market.len(), 1);
    let ana = market.get_professional("ana").unwrap();
    assert_eq!(ana.practice_areas, vec!["Ansiedade".to_string()]);

    cleanup(&temp_file);
}

#[test]
fn test_directory_persists_across_reload() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![psychologist("ana", vec!["Ansiedade"], Some(4.5))])
        .unwrap();
    market
        .set_status("ana", ModerationStatus::Approved)
        .unwrap()
        .unwrap();

    // Fresh instance over the same file sees the same state
    let reloaded = Marketplace::with_file_path(temp_file.clone());
    let ana = reloaded.get_professional("ana").unwrap();
    assert_eq!(ana.status, ModerationStatus::Approved);
    assert_eq!(ana.rating, Some(4.5));
    assert_eq!(ana.practice_areas, vec!["Ansiedade".to_string()]);

    cleanup(&temp_file);
}

#[test]
fn test_moderation_flow() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![psychologist("ana", vec![], None)])
        .unwrap();

    let updated = market
        .set_status("ana", ModerationStatus::Rejected)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ModerationStatus::Rejected);
    assert!(updated.updated_at >= updated.created_at);

    assert!(market
        .set_status("missing", ModerationStatus::Approved)
        .unwrap()
        .is_none());

    cleanup(&temp_file);
}

#[test]
fn test_delete_professionals() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![
            psychologist("ana", vec![], None),
            psychologist("bia", vec![], None),
        ])
        .unwrap();

    market.delete_professionals(vec!["ana".to_string()]).unwrap();
    assert_eq!(market.len(), 1);
    assert!(market.get_professional("ana").is_none());
    assert!(market.get_professional("bia").is_some());

    cleanup(&temp_file);
}

#[test]
fn test_end_to_end_search_ranks_by_relevance() {
    let (market, temp_file) = setup_test_market();

    let mut generalist =
        Professional::new("carlos".to_string(), "Dr. Carlos".to_string(), "Médico".to_string());
    generalist.practice_areas = vec!["Clínica Geral".to_string()];
    generalist.rating = Some(5.0);

    market
        .register_professionals(vec![
            generalist,
            psychologist("ana", vec!["Ansiedade"], Some(4.0)),
            psychologist("bia", vec!["Trauma"], Some(3.0)),
        ])
        .unwrap();
    for id in ["carlos", "ana", "bia"] {
        market.set_status(id, ModerationStatus::Approved).unwrap().unwrap();
    }

    let results = market.search_professionals(&local_search(), "ansiedade", None);

    // Ana matches the expanded query directly and wins; Carlos only
    // carries his rating/10 floor yet still clears the score > 0 filter.
    assert_eq!(results[0].professional.id, "ana");
    assert!(results.iter().all(|r| r.score > 0.0));
    assert!(results
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
    assert!(results.iter().any(|r| r.professional.id == "carlos"));

    cleanup(&temp_file);
}

#[test]
fn test_search_excludes_unmoderated_entries() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![psychologist("ana", vec!["Ansiedade"], Some(5.0))])
        .unwrap();

    // Still pending: invisible to the marketplace search
    let results = market.search_professionals(&local_search(), "ansiedade", None);
    assert!(results.is_empty());

    market.set_status("ana", ModerationStatus::Approved).unwrap().unwrap();
    let results = market.search_professionals(&local_search(), "ansiedade", None);
    assert_eq!(results.len(), 1);

    cleanup(&temp_file);
}

struct OfflineScorer;

impl RemoteScorer for OfflineScorer {
    fn score_candidates(
        &self,
        _query: &str,
        _candidates: &[Professional],
    ) -> MarketResult<Vec<ScoredProfessional>> {
        Err("service unavailable".into())
    }
}

#[test]
fn test_search_falls_back_when_remote_is_down() {
    let (market, temp_file) = setup_test_market();

    market
        .register_professionals(vec![psychologist("ana", vec!["Ansiedade"], None)])
        .unwrap();
    market.set_status("ana", ModerationStatus::Approved).unwrap().unwrap();

    let search = SmartSearch::with_remote(
        Ranker::new(SynonymTable::clinical_default()),
        Box::new(OfflineScorer),
    );

    let results = market.search_professionals(&search, "ansiedade", None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].professional.id, "ana");

    cleanup(&temp_file);
}

#[test]
fn test_search_with_custom_synonym_table() {
    let (market, temp_file) = setup_test_market();

    let mut sleep_doc =
        Professional::new("dora".to_string(), "Dra. Dora".to_string(), "Médico".to_string());
    sleep_doc.practice_areas = vec!["Insônia".to_string()];
    market.register_professionals(vec![sleep_doc]).unwrap();
    market.set_status("dora", ModerationStatus::Approved).unwrap().unwrap();

    let table = SynonymTable::from_json_str(r#"{"sono": ["insônia", "apneia"]}"#).unwrap();
    let search = SmartSearch::local(Ranker::new(table));

    let results = market.search_professionals(&search, "sono", None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].professional.id, "dora");

    cleanup(&temp_file);
}
