//! Storage Module
//!
//! In-process state the HTTP layer serves from.
//!
//! ## Core Concepts
//! - **Record store**: `TattooStore` holds the canonical records in insertion order.
//!   That order is the tie-break order of every engine operation, so it is preserved
//!   across upserts.
//! - **Revisions**: Every mutation bumps the store revision.
//! - **Query cache**: `QueryCache` maps explicit cache keys to engine results. An entry
//!   is served only while it is younger than the cache TTL and was computed from the
//!   current store revision.

pub mod cache;
pub mod memory;
