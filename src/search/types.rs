use super::dates::{DateBound, parse_date_bound, parse_minted_date};
use crate::tags::{Tag, TagCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Canonical tattoo record.
///
/// Built once by the normalizer (or taken from the fixture) and never mutated by
/// the engine afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tattoo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub owner: String,
    pub owner_address: String,
    pub image_url: String,
    pub story: String,
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_soul_bound: bool,
    /// ISO-8601 date; may be malformed in explorer data.
    pub minted_date: String,
    #[serde(default)]
    pub tip_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub share_count: u64,
}

impl Tattoo {
    /// Parsed mint date, `None` when the stored string is not a date.
    pub fn minted_at(&self) -> Option<DateTime<Utc>> {
        parse_minted_date(&self.minted_date)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.tags.iter().any(|tag| tag.matches_label(label))
    }

    pub fn has_category(&self, category: TagCategory) -> bool {
        self.tags.iter().any(|tag| tag.category == category)
    }

    pub fn tag_labels(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.label.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest mint date first.
    #[default]
    Recent,
    /// Most tips first.
    Popular,
    /// Most views first.
    Trending,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(SortBy::Recent),
            "popular" => Ok(SortBy::Popular),
            "trending" => Ok(SortBy::Trending),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Recent => "recent",
            SortBy::Popular => "popular",
            SortBy::Trending => "trending",
        };
        f.write_str(name)
    }
}

/// Inclusive mint-date window. Unparseable bounds are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateRange {
    fn bounds(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let start = self
            .start
            .as_deref()
            .and_then(|s| parse_date_bound(s, DateBound::Start));
        let end = self
            .end
            .as_deref()
            .and_then(|s| parse_date_bound(s, DateBound::End));
        (start, end)
    }

    /// True when neither bound restricts anything.
    pub fn is_unbounded(&self) -> bool {
        self.bounds() == (None, None)
    }

    /// Whether a record's mint date falls inside the range. A record without a
    /// parseable date only matches an unbounded range.
    pub fn contains(&self, minted_at: Option<DateTime<Utc>>) -> bool {
        let (start, end) = self.bounds();
        if start.is_none() && end.is_none() {
            return true;
        }

        let Some(at) = minted_at else {
            return false;
        };

        start.is_none_or(|start| at >= start) && end.is_none_or(|end| at <= end)
    }
}

/// A discovery query.
///
/// `limit` and `offset` keep the caller's raw values; non-positive limits and
/// negative offsets are read as "none" by [`Query::window`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub tag_labels: BTreeSet<String>,
    pub categories: BTreeSet<TagCategory>,
    pub artist: Option<String>,
    pub location: Option<String>,
    pub date_range: Option<DateRange>,
    pub sort_by: SortBy,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = TagCategory>,
    {
        self.categories.extend(categories);
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_date_range(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.date_range = Some(DateRange {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        });
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Effective `(offset, limit)` after discarding invalid values.
    pub fn window(&self) -> (usize, Option<usize>) {
        let offset = self
            .offset
            .filter(|offset| *offset > 0)
            .map(|offset| offset as usize)
            .unwrap_or(0);
        (offset, positive_limit(self.limit))
    }
}

/// Reads a caller-supplied limit; anything not strictly positive means "no limit".
pub fn positive_limit(raw: Option<i64>) -> Option<usize> {
    raw.filter(|limit| *limit > 0).map(|limit| limit as usize)
}

/// A record paired with the number of tags it shares with a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub record: Tattoo,
    pub score: usize,
}

/// Search output before it is wrapped for the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// Number of matches before pagination.
    pub total_count: usize,
    pub results: Vec<Tattoo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: Query,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<Tattoo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedResponse {
    pub reference: String,
    pub count: usize,
    pub results: Vec<ScoredResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub count: usize,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct TwinsRequest {
    pub tags: Vec<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}
