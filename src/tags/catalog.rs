use super::types::TagCategory;
use std::collections::HashMap;

const STYLE: &[&str] = &[
    "Traditional",
    "Realism",
    "Watercolor",
    "Japanese",
    "Tribal",
    "Minimalist",
    "Geometric",
    "Neo-Traditional",
    "Blackwork",
    "Fine Line",
];

const THEME: &[&str] = &[
    "Nature",
    "Animal",
    "Spiritual",
    "Memorial",
    "Quote",
    "Portrait",
    "Abstract",
    "Religious",
    "Mythology",
    "Pop Culture",
];

const BODY_PART: &[&str] = &[
    "Arm", "Forearm", "Shoulder", "Back", "Chest", "Leg", "Thigh", "Ankle", "Hand", "Neck",
];

const COLOR: &[&str] = &[
    "Blackwork",
    "Colorful",
    "Grayscale",
    "Black & Grey",
    "Single Color",
    "Vibrant",
    "Pastel",
    "Neon",
];

const SIZE: &[&str] = &[
    "Tiny",
    "Small",
    "Medium",
    "Large",
    "Full Sleeve",
    "Half Sleeve",
    "Full Back",
    "Cover Up",
];

const MEANING: &[&str] = &[
    "Love",
    "Family",
    "Strength",
    "Freedom",
    "Memory",
    "Protection",
    "Hope",
    "Journey",
    "Resilience",
    "Identity",
];

/// Suggested labels for a category. Artist labels come from the data itself,
/// so that list is always empty.
pub fn popular_tags(category: TagCategory) -> &'static [&'static str] {
    match category {
        TagCategory::Style => STYLE,
        TagCategory::Theme => THEME,
        TagCategory::BodyPart => BODY_PART,
        TagCategory::Color => COLOR,
        TagCategory::Size => SIZE,
        TagCategory::Artist => &[],
        TagCategory::Meaning => MEANING,
    }
}

pub fn popular_tag_catalog() -> HashMap<TagCategory, Vec<String>> {
    TagCategory::ALL
        .into_iter()
        .map(|category| {
            let labels = popular_tags(category)
                .iter()
                .map(|label| label.to_string())
                .collect();
            (category, labels)
        })
        .collect()
}
