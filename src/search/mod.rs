//! Search Module
//!
//! The discovery engine: everything the gallery needs to find tattoos by their tags.
//!
//! ## Overview
//! All engine functions are pure and synchronous. They take a slice of records that
//! has already been fetched and return a fresh, deterministically ordered result.
//! Ties are always broken by input order, so callers must not re-sort the output.
//!
//! ## Responsibilities
//! - **Filtering**: Tag (OR), category (OR), artist/location substring and date range.
//! - **Sorting**: Recent, popular and trending orders, all stable.
//! - **Scoring**: Trending tag aggregation and shared-tag ("twin") relevance.
//!
//! ## Submodules
//! - **`dates`**: Lenient parsing of mint dates.
//! - **`engine`**: The filter/sort/paginate pipeline.
//! - **`scoring`**: Trending tags, related records and tag suggestions.
//! - **`handlers`**: HTTP handlers for the Axum server.
//! - **`types`**: The canonical record, queries and result shapes.

pub mod dates;
pub mod engine;
pub mod handlers;
pub mod scoring;
pub mod types;
