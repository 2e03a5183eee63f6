//! Tattoo Discovery Library
//!
//! Tag-based discovery for the tattoo NFT gallery: normalizing explorer records,
//! searching them by tags, and ranking trending tags and related tattoos.
//! The binary (`main.rs`) serves all of it over a small JSON API.
//!
//! ## Architecture Modules
//! - **`tags`**: The tag model, keyword-based category inference and the catalog of
//!   suggested labels.
//! - **`ingestion`**: Record sources (explorer client, static fixture) and the
//!   normalizer that maps raw explorer instances onto canonical records.
//! - **`search`**: The pure discovery engine (filter/sort pipeline and relevance
//!   scoring) plus its HTTP handlers.
//! - **`storage`**: The ordered in-memory record store and the revision-aware query
//!   cache.
//! - **`config`** / **`error`**: Service configuration and service-layer errors.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;
pub mod tags;
