//! Care Market Search Server - Binary Entry Point
//!
//! This is the main entry point for the market-server binary.

use std::env;
use std::sync::Arc;

use care_market::api::http::create_router;
use care_market::api::state::AppState;
use care_market::market::Marketplace;
use care_market::search::{Ranker, SmartSearch, SynonymTable};
use care_market::types::MarketResult;

#[tokio::main]
async fn main() -> MarketResult<()> {
    let table = match env::var("SYNONYM_TABLE_PATH") {
        Ok(path) => {
            let table = SynonymTable::from_file(&path)?;
            eprintln!("[Server] Loaded synonym table with {} keys from {}", table.len(), path);
            table
        }
        Err(_) => SynonymTable::clinical_default(),
    };

    let market = Arc::new(Marketplace::new());
    eprintln!(
        "[Server] Directory: {} professionals from {}",
        market.len(),
        market.file_path()
    );

    // No remote scorer is wired in by default; searches run the local
    // fallback ranker. Deployments with an AI scoring service plug it in
    // through SmartSearch::with_remote.
    let search = SmartSearch::local(Ranker::new(table));
    let state = Arc::new(AppState::new(market, search));
    let app = create_router(state);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    eprintln!("[Server] Listening on http://{}", listener.local_addr()?);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut shutdown_tx = Some(shutdown_tx);
    ctrlc::set_handler(move || {
        if let Some(tx) = shutdown_tx.take() {
            let _ = tx.send(());
        }
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            eprintln!("[Server] Shutting down");
        })
        .await?;

    Ok(())
}
