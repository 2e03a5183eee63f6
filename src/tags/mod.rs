//! Tag Module
//!
//! Tags are the facets every discovery feature is built on: the search filters,
//! trending aggregation and twin matching all compare tag labels.
//!
//! ## Identity
//! A tag is identified by its label compared case-insensitively, never by its `id`.
//! Within one tattoo no two tags may share a label; `TagSet` enforces that.
//!
//! ## Submodules
//! - **`types`**: `Tag`, `TagCategory` and the `TagSet` collection.
//! - **`inference`**: Keyword-based category inference for free-text labels.
//! - **`catalog`**: The fixed per-category list of suggested labels.

pub mod catalog;
pub mod inference;
pub mod types;

pub use inference::infer_category;
pub use types::{Tag, TagCategory, TagSet};

#[cfg(test)]
mod tests;
