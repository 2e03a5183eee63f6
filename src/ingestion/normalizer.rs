//! Record Normalizer
//!
//! Maps explorer instances onto canonical `Tattoo` records. Pure: the same raw
//! record always normalizes to the same tattoo.

use super::types::{MetadataPayload, RawMetadata, RawRecord};
use crate::search::types::Tattoo;
use crate::tags::{TagSet, infer_category};

/// Normalizes one raw record, or returns `None` when it has no usable metadata.
pub fn normalize(raw: &RawRecord) -> Option<Tattoo> {
    match raw.payload() {
        MetadataPayload::Present(metadata) => Some(build_tattoo(raw, metadata)),
        MetadataPayload::Absent => None,
    }
}

/// Normalizes a batch, dropping records without metadata.
pub fn normalize_all(raws: &[RawRecord]) -> Vec<Tattoo> {
    let tattoos: Vec<Tattoo> = raws.iter().filter_map(normalize).collect();

    let skipped = raws.len() - tattoos.len();
    if skipped > 0 {
        tracing::debug!(
            "Normalized {} records, skipped {} without metadata",
            tattoos.len(),
            skipped
        );
    }

    tattoos
}

/// Builds the tag list for a sequence of raw labels.
///
/// Ids are `<label>-<index>` where index is the raw position, so they stay
/// unique and positionally stable. Blank labels and repeated labels
/// (case-insensitive) are dropped.
pub fn build_tags(raw_tags: &[String]) -> TagSet {
    let mut tags = TagSet::with_capacity_limit(usize::MAX);

    for (index, label) in raw_tags.iter().enumerate() {
        let trimmed = label.trim();
        tags.push(
            format!("{}-{}", trimmed, index),
            trimmed,
            infer_category(trimmed),
        );
    }

    tags
}

fn build_tattoo(raw: &RawRecord, metadata: RawMetadata) -> Tattoo {
    let owner_hash = raw
        .owner
        .as_ref()
        .map(|owner| owner.hash.clone())
        .unwrap_or_default();

    let title = metadata
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("Tattoo #{}", raw.id));
    let description = metadata.description.unwrap_or_default();
    let story = metadata
        .story
        .filter(|story| !story.is_empty())
        .unwrap_or_else(|| description.clone());
    let image_url = metadata
        .image
        .filter(|image| !image.is_empty())
        .or_else(|| raw.image_url.clone())
        .unwrap_or_default();

    Tattoo {
        id: raw.id.clone(),
        token_id: raw.id.parse().ok(),
        contract_address: raw.token.as_ref().map(|token| token.address.clone()),
        title,
        description,
        owner: owner_hash.clone(),
        owner_address: owner_hash,
        image_url,
        story,
        tags: build_tags(&metadata.tags).into_vec(),
        artist: metadata.artist,
        studio: metadata.studio,
        location: metadata.location,
        is_soul_bound: metadata.soul_bound,
        minted_date: metadata.mint_date.unwrap_or_default(),
        tip_count: metadata.tip_count.unwrap_or(0),
        view_count: metadata.view_count.unwrap_or(0),
        share_count: metadata.share_count.unwrap_or(0),
    }
}
