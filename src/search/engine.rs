use super::types::{Query, SearchPage, SortBy, Tattoo};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Runs the filter/sort/paginate pipeline and returns the requested page.
pub fn search(records: &[Tattoo], query: &Query) -> Vec<Tattoo> {
    search_page(records, query).results
}

/// Like [`search`], but also reports how many records matched before pagination.
pub fn search_page(records: &[Tattoo], query: &Query) -> SearchPage {
    let selected_labels: HashSet<String> = query
        .tag_labels
        .iter()
        .map(|label| label.trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect();

    let mut matches: Vec<&Tattoo> = records
        .iter()
        .filter(|tattoo| matches_any_label(tattoo, &selected_labels))
        .filter(|tattoo| {
            query.categories.is_empty()
                || query
                    .categories
                    .iter()
                    .any(|category| tattoo.has_category(*category))
        })
        .filter(|tattoo| contains_ignore_case(tattoo.artist.as_deref(), query.artist.as_deref()))
        .filter(|tattoo| {
            contains_ignore_case(tattoo.location.as_deref(), query.location.as_deref())
        })
        .filter(|tattoo| match &query.date_range {
            Some(range) => range.contains(tattoo.minted_at()),
            None => true,
        })
        .collect();

    sort_records(&mut matches, query.sort_by);

    let total_count = matches.len();
    let (offset, limit) = query.window();
    let results = matches
        .into_iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    tracing::trace!(
        "search matched {} of {} records (sort={})",
        total_count,
        records.len(),
        query.sort_by
    );

    SearchPage {
        total_count,
        results,
    }
}

/// Stable sort in the requested order; equal keys keep their input order.
pub fn sort_records(records: &mut [&Tattoo], sort_by: SortBy) {
    match sort_by {
        // `None` (unparseable) is the smallest key, so it lands last once reversed.
        SortBy::Recent => records.sort_by_cached_key(|tattoo| Reverse(tattoo.minted_at())),
        SortBy::Popular => records.sort_by_key(|tattoo| Reverse(tattoo.tip_count)),
        SortBy::Trending => records.sort_by_key(|tattoo| Reverse(tattoo.view_count)),
    }
}

/// OR semantics: one shared label is enough. An empty selection matches everything.
fn matches_any_label(tattoo: &Tattoo, selected_lowercase: &HashSet<String>) -> bool {
    selected_lowercase.is_empty()
        || tattoo
            .tags
            .iter()
            .any(|tag| selected_lowercase.contains(&tag.label.to_lowercase()))
}

fn contains_ignore_case(field: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => field
            .map(|value| value.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false),
    }
}
