use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the number of tags a single tattoo may carry.
pub const MAX_TAGS_PER_TATTOO: usize = 15;

/// Classification of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    /// Traditional, Realism, Watercolor, ...
    Style,
    /// Nature, Spiritual, Memorial, ...
    Theme,
    /// Arm, Back, Chest, ...
    BodyPart,
    /// Blackwork, Colorful, Grayscale, ...
    Color,
    /// Tiny, Small, Full Sleeve, ...
    Size,
    /// Artist name or signature style.
    Artist,
    /// Family, Love, Strength, ...
    Meaning,
}

impl TagCategory {
    pub const ALL: [TagCategory; 7] = [
        TagCategory::Style,
        TagCategory::Theme,
        TagCategory::BodyPart,
        TagCategory::Color,
        TagCategory::Size,
        TagCategory::Artist,
        TagCategory::Meaning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Style => "style",
            TagCategory::Theme => "theme",
            TagCategory::BodyPart => "body_part",
            TagCategory::Color => "color",
            TagCategory::Size => "size",
            TagCategory::Artist => "artist",
            TagCategory::Meaning => "meaning",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TagCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("Unknown tag category: {}", s))
    }
}

/// A labeled, categorized facet of a tattoo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
    pub category: TagCategory,
    /// Number of tattoos carrying this label; only set on aggregated output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Tag {
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: TagCategory) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
            count: None,
        }
    }

    /// Case-insensitive label comparison, the identity rule for tags.
    pub fn matches_label(&self, label: &str) -> bool {
        self.label
            .chars()
            .flat_map(char::to_lowercase)
            .eq(label.chars().flat_map(char::to_lowercase))
    }
}

/// Ordered tag collection that keeps labels unique (case-insensitively)
/// and bounded in size.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSet {
    tags: Vec<Tag>,
    max_tags: usize,
}

impl TagSet {
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_TAGS_PER_TATTOO)
    }

    pub fn with_capacity_limit(max_tags: usize) -> Self {
        Self {
            tags: Vec::new(),
            max_tags,
        }
    }

    /// Adds a tag under the given id.
    ///
    /// The label is trimmed first. Returns `false` without modifying the set when
    /// the trimmed label is empty, already present, or the set is full.
    pub fn push(&mut self, id: impl Into<String>, label: &str, category: TagCategory) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.contains_label(trimmed) || self.is_full() {
            return false;
        }

        self.tags.push(Tag::new(id, trimmed, category));
        true
    }

    /// Removes the tag with the given id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Tag> {
        let position = self.tags.iter().position(|tag| tag.id == id)?;
        Some(self.tags.remove(position))
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.tags.iter().any(|tag| tag.matches_label(label))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.label.as_str()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= self.max_tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.tags
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new()
    }
}
