use super::engine::search_page;
use super::scoring::{Reference, related, suggest_tags, trending_tags};
use super::types::{
    Query as DiscoveryQuery, RelatedResponse, SearchResponse, SortBy, Tattoo, TrendingResponse,
    TwinsRequest, positive_limit,
};
use crate::error::DiscoveryError;
use crate::storage::cache::DiscoveryCaches;
use crate::storage::memory::TattooStore;
use crate::tags::catalog::popular_tag_catalog;
use crate::tags::{Tag, TagCategory};
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_RELATED_LIMIT: usize = 6;
pub const DEFAULT_TRENDING_LIMIT: usize = 20;
pub const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// Query string of `GET /tattoos`. List values are comma-separated.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub tags: Option<String>,
    pub categories: Option<String>,
    pub artist: Option<String>,
    pub location: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SearchParams {
    pub fn into_query(self) -> Result<DiscoveryQuery, DiscoveryError> {
        let categories = split_list(self.categories.as_deref())
            .into_iter()
            .map(|raw| raw.parse::<TagCategory>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(DiscoveryError::InvalidInput)?;

        let sort_by = match self.sort_by.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse::<SortBy>().map_err(DiscoveryError::InvalidInput)?
            }
            _ => SortBy::default(),
        };

        let mut query = DiscoveryQuery::new()
            .with_tags(split_list(self.tags.as_deref()))
            .with_categories(categories)
            .sorted_by(sort_by);
        query.artist = self.artist.filter(|artist| !artist.is_empty());
        query.location = self.location.filter(|location| !location.is_empty());
        query.limit = self.limit;
        query.offset = self.offset;
        if self.from.is_some() || self.to.is_some() {
            query = query.with_date_range(self.from.as_deref(), self.to.as_deref());
        }

        Ok(query)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub selected: Option<String>,
    pub limit: Option<i64>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<TattooStore>>,
    Extension(caches): Extension<Arc<DiscoveryCaches>>,
) -> Result<Json<SearchResponse>, DiscoveryError> {
    let query = params.into_query()?;
    let snapshot = store.snapshot().await;

    let key = format!("{:?}", query);
    let page = caches.search.get_or_compute(&key, snapshot.revision, || {
        search_page(&snapshot.records, &query)
    });

    tracing::debug!(
        "Search {:?} -> {} of {} matches",
        query.tag_labels,
        page.results.len(),
        page.total_count
    );

    Ok(Json(SearchResponse {
        query,
        total_count: page.total_count,
        count: page.results.len(),
        results: page.results,
    }))
}

pub async fn handle_get_tattoo(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<TattooStore>>,
) -> Result<Json<Tattoo>, DiscoveryError> {
    store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| DiscoveryError::NotFound(format!("tattoo {}", id)))
}

pub async fn handle_related(
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
    Extension(store): Extension<Arc<TattooStore>>,
    Extension(caches): Extension<Arc<DiscoveryCaches>>,
) -> Result<Json<RelatedResponse>, DiscoveryError> {
    let snapshot = store.snapshot().await;
    let reference = snapshot
        .records
        .iter()
        .find(|tattoo| tattoo.id == id)
        .ok_or_else(|| DiscoveryError::NotFound(format!("tattoo {}", id)))?;

    let limit = params.limit.map_or(Some(DEFAULT_RELATED_LIMIT), |raw| {
        positive_limit(Some(raw))
    });
    let key = format!("{}:{:?}", id, limit);
    let results = caches.related.get_or_compute(&key, snapshot.revision, || {
        related(&snapshot.records, Reference::Record(reference), limit)
    });

    Ok(Json(RelatedResponse {
        reference: id,
        count: results.len(),
        results,
    }))
}

pub async fn handle_twins(
    Extension(store): Extension<Arc<TattooStore>>,
    Json(req): Json<TwinsRequest>,
) -> Json<RelatedResponse> {
    let snapshot = store.snapshot().await;
    let results = related(
        &snapshot.records,
        Reference::Labels(&req.tags),
        positive_limit(req.limit),
    );

    tracing::debug!("Twins for {:?}: {} matches", req.tags, results.len());

    Json(RelatedResponse {
        reference: req.tags.join(","),
        count: results.len(),
        results,
    })
}

pub async fn handle_trending_tags(
    Query(params): Query<LimitParams>,
    Extension(store): Extension<Arc<TattooStore>>,
    Extension(caches): Extension<Arc<DiscoveryCaches>>,
) -> Json<TrendingResponse> {
    let limit = trending_limit(params.limit);
    let tags = cached_trending(&store, &caches, limit).await;

    Json(TrendingResponse {
        count: tags.len(),
        tags,
    })
}

pub async fn handle_suggest_tags(
    Query(params): Query<SuggestParams>,
    Extension(store): Extension<Arc<TattooStore>>,
    Extension(caches): Extension<Arc<DiscoveryCaches>>,
) -> Json<TrendingResponse> {
    let trending = cached_trending(&store, &caches, None).await;
    let selected = split_list(params.selected.as_deref());
    let limit = params.limit.map_or(Some(DEFAULT_SUGGEST_LIMIT), |raw| {
        positive_limit(Some(raw))
    });

    let tags = suggest_tags(&trending, &params.q, &selected, limit);

    Json(TrendingResponse {
        count: tags.len(),
        tags,
    })
}

pub async fn handle_popular_tags() -> Json<HashMap<TagCategory, Vec<String>>> {
    Json(popular_tag_catalog())
}

fn trending_limit(raw: Option<i64>) -> Option<usize> {
    raw.map_or(Some(DEFAULT_TRENDING_LIMIT), |raw| positive_limit(Some(raw)))
}

async fn cached_trending(
    store: &TattooStore,
    caches: &DiscoveryCaches,
    limit: Option<usize>,
) -> Vec<Tag> {
    let snapshot = store.snapshot().await;
    let key = format!("{:?}", limit);
    caches.trending.get_or_compute(&key, snapshot.revision, || {
        trending_tags(&snapshot.records, limit)
    })
}

/// Splits a comma-separated query value, dropping blanks.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
