//! Ingestion Module
//!
//! Turns tattoo records from their source shapes into canonical `Tattoo` values.
//!
//! ## Workflow
//! 1. **Fetch**: `ExplorerClient` pages NFT instances out of the block explorer API,
//!    or `fixtures` supplies the static gallery.
//! 2. **Classify**: Each raw instance's metadata is classified as present or absent.
//! 3. **Normalize**: Present metadata is mapped onto the canonical record, with tag
//!    categories inferred from their labels. Absent metadata is skipped silently.
//! 4. **Store**: The handlers upsert the normalized records into the `TattooStore`.

pub mod explorer;
pub mod fixtures;
pub mod handlers;
pub mod normalizer;
pub mod types;

#[cfg(test)]
mod tests;
