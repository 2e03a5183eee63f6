use axum::{
    Extension, Router,
    routing::{get, post},
};
use clap::Parser;
use std::sync::Arc;
use tattoo_discovery::config::Config;
use tattoo_discovery::ingestion::explorer::ExplorerClient;
use tattoo_discovery::ingestion::fixtures::mock_tattoos;
use tattoo_discovery::ingestion::handlers::{handle_import, sync_from_explorer};
use tattoo_discovery::search::handlers::{
    handle_get_tattoo, handle_popular_tags, handle_related, handle_search, handle_suggest_tags,
    handle_trending_tags, handle_twins,
};
use tattoo_discovery::storage::cache::DiscoveryCaches;
use tattoo_discovery::storage::memory::TattooStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Record store:
    let initial = if config.fixtures { mock_tattoos() } else { Vec::new() };
    let store = Arc::new(TattooStore::with_records(initial).await);
    if config.fixtures {
        tracing::info!("Loaded {} fixture tattoos", store.len().await);
    }

    // 2. Explorer sync:
    let explorer = Arc::new(
        ExplorerClient::new(&config.explorer_url, &config.contract)
            .with_retry(config.explorer_timeout(), config.explorer_attempts),
    );
    if explorer.is_configured() {
        tracing::info!(
            "Syncing contract {} from {}",
            config.contract,
            config.explorer_url
        );
        if let Err(e) = sync_from_explorer(&explorer, &store, config.fetch_limit).await {
            tracing::error!("Initial explorer sync failed: {}", e);
        }

        if let Some(interval) = config.refresh_interval() {
            let explorer = explorer.clone();
            let store = store.clone();
            let limit = config.fetch_limit;
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                ticker.tick().await;

                loop {
                    ticker.tick().await;
                    if let Err(e) = sync_from_explorer(&explorer, &store, limit).await {
                        tracing::warn!("Explorer refresh failed: {}", e);
                    }
                }
            });
        }
    } else {
        tracing::info!("No contract configured, explorer sync disabled");
    }

    let caches = Arc::new(DiscoveryCaches::new(config.cache_settings()));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/tattoos", get(handle_search))
        .route("/tattoos/import", post(handle_import))
        .route("/tattoos/:id", get(handle_get_tattoo))
        .route("/tattoos/:id/related", get(handle_related))
        .route("/tags/trending", get(handle_trending_tags))
        .route("/tags/suggest", get(handle_suggest_tags))
        .route("/tags/popular", get(handle_popular_tags))
        .route("/twins", post(handle_twins))
        .layer(Extension(store))
        .layer(Extension(caches));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_health(
    Extension(store): Extension<Arc<TattooStore>>,
) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "records": store.len().await,
        "revision": store.revision().await,
    }))
}
