//! Relevance Scoring
//!
//! Trending-tag aggregation and shared-tag relevance. Both count case-insensitive
//! label matches and break ties by first appearance in the input.

use super::types::{ScoredResult, Tattoo};
use crate::tags::Tag;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// What to compare candidates against.
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    /// A full record. The record itself is never returned as its own match.
    Record(&'a Tattoo),
    /// A bare set of labels, e.g. the tags a visitor picked on the twins page.
    Labels(&'a [String]),
}

impl Reference<'_> {
    fn excluded_id(&self) -> Option<&str> {
        match self {
            Reference::Record(tattoo) => Some(tattoo.id.as_str()),
            Reference::Labels(_) => None,
        }
    }

    fn lowercase_labels(&self) -> HashSet<String> {
        match self {
            Reference::Record(tattoo) => tattoo
                .tags
                .iter()
                .map(|tag| tag.label.to_lowercase())
                .collect(),
            Reference::Labels(labels) => labels
                .iter()
                .map(|label| label.trim().to_lowercase())
                .filter(|label| !label.is_empty())
                .collect(),
        }
    }
}

/// Most frequent labels across all records.
///
/// The returned tags carry `count` and an id of the form `trending-<rank>`. When
/// one label appears under different categories, the first occurrence's category
/// (and spelling) is kept.
pub fn trending_tags(records: &[Tattoo], limit: Option<usize>) -> Vec<Tag> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut aggregated: Vec<Tag> = Vec::new();

    for tag in records.iter().flat_map(|tattoo| tattoo.tags.iter()) {
        let key = tag.label.to_lowercase();
        match positions.get(&key) {
            Some(&position) => {
                if let Some(count) = aggregated[position].count.as_mut() {
                    *count += 1;
                }
            }
            None => {
                positions.insert(key, aggregated.len());
                aggregated.push(Tag {
                    id: String::new(),
                    label: tag.label.clone(),
                    category: tag.category,
                    count: Some(1),
                });
            }
        }
    }

    aggregated.sort_by_key(|tag| Reverse(tag.count.unwrap_or(0)));
    aggregated.truncate(limit.unwrap_or(usize::MAX));

    for (rank, tag) in aggregated.iter_mut().enumerate() {
        tag.id = format!("trending-{}", rank);
    }

    aggregated
}

/// Number of the candidate's tags whose label is in `reference_lowercase`.
pub fn overlap_score(candidate: &Tattoo, reference_lowercase: &HashSet<String>) -> usize {
    candidate
        .tags
        .iter()
        .filter(|tag| reference_lowercase.contains(&tag.label.to_lowercase()))
        .count()
}

/// Records sharing at least one tag with the reference, best match first.
pub fn related(
    records: &[Tattoo],
    reference: Reference<'_>,
    limit: Option<usize>,
) -> Vec<ScoredResult> {
    let labels = reference.lowercase_labels();
    if labels.is_empty() {
        return Vec::new();
    }
    let excluded_id = reference.excluded_id();

    let mut scored: Vec<ScoredResult> = records
        .iter()
        .filter(|candidate| Some(candidate.id.as_str()) != excluded_id)
        .filter_map(|candidate| {
            let score = overlap_score(candidate, &labels);
            (score > 0).then(|| ScoredResult {
                record: candidate.clone(),
                score,
            })
        })
        .collect();

    scored.sort_by_key(|result| Reverse(result.score));
    scored.truncate(limit.unwrap_or(usize::MAX));
    scored
}

/// Twin finding over a set of picked labels; records only, best match first.
pub fn find_twins(records: &[Tattoo], labels: &[String], limit: Option<usize>) -> Vec<Tattoo> {
    related(records, Reference::Labels(labels), limit)
        .into_iter()
        .map(|result| result.record)
        .collect()
}

/// Trending tags whose label contains `query`, minus the ones already selected.
/// A blank query suggests nothing.
pub fn suggest_tags(
    trending: &[Tag],
    query: &str,
    selected: &[String],
    limit: Option<usize>,
) -> Vec<Tag> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let selected: HashSet<String> = selected
        .iter()
        .map(|label| label.trim().to_lowercase())
        .collect();

    trending
        .iter()
        .filter_map(|tag| {
            let label = tag.label.to_lowercase();
            (label.contains(&needle) && !selected.contains(&label)).then_some(tag)
        })
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
