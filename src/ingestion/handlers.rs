use super::explorer::ExplorerClient;
use super::normalizer::normalize_all;
use super::types::{ImportRequest, ImportResponse};
use crate::error::DiscoveryError;
use crate::storage::memory::TattooStore;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /tattoos/import`: normalizes a page of explorer instances and upserts the
/// usable ones. Instances without metadata are counted as skipped, not rejected.
pub async fn handle_import(
    Extension(store): Extension<Arc<TattooStore>>,
    Json(req): Json<ImportRequest>,
) -> (StatusCode, Json<ImportResponse>) {
    let received = req.items.len();
    let tattoos = normalize_all(&req.items);
    let skipped = received - tattoos.len();

    let imported = tattoos.len();
    let inserted = store.upsert_many(tattoos).await;
    let total_records = store.len().await;

    tracing::info!(
        "Imported {} tattoos ({} new, {} skipped), store holds {}",
        imported,
        inserted,
        skipped,
        total_records
    );

    (
        StatusCode::OK,
        Json(ImportResponse {
            imported,
            skipped,
            total_records,
        }),
    )
}

/// Pulls one page of instances from the explorer into the store.
/// Returns the number of tattoos that were normalized.
pub async fn sync_from_explorer(
    client: &ExplorerClient,
    store: &TattooStore,
    limit: usize,
) -> Result<usize, DiscoveryError> {
    let tattoos = client.fetch_tattoos(0, limit).await?;
    let fetched = tattoos.len();
    let inserted = store.upsert_many(tattoos).await;

    tracing::info!(
        "Explorer sync: {} tattoos fetched, {} new",
        fetched,
        inserted
    );
    Ok(fetched)
}
