//! Tag Category Inference
//!
//! Explorer metadata only carries bare label strings, so categories are guessed
//! from keywords. The rules are an ordered table: the first category with a
//! keyword contained in the lower-cased label wins, and `Theme` is the fallback.

use super::types::TagCategory;

/// A single inference rule: a category and the keywords that select it.
pub struct CategoryRule {
    pub category: TagCategory,
    pub keywords: &'static [&'static str],
}

/// Rules in priority order. A label such as "black arm" hits both `BodyPart`
/// and `Color`; `BodyPart` is listed first and therefore wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: TagCategory::Style,
        keywords: &[
            "traditional",
            "realism",
            "watercolor",
            "japanese",
            "tribal",
            "minimalist",
            "geometric",
        ],
    },
    CategoryRule {
        category: TagCategory::BodyPart,
        keywords: &[
            "arm", "leg", "back", "chest", "shoulder", "hand", "neck", "ankle",
        ],
    },
    CategoryRule {
        category: TagCategory::Color,
        keywords: &["black", "color", "grey", "gray", "vibrant", "pastel"],
    },
    CategoryRule {
        category: TagCategory::Size,
        keywords: &["tiny", "small", "medium", "large", "sleeve", "full"],
    },
];

pub const DEFAULT_CATEGORY: TagCategory = TagCategory::Theme;

pub fn infer_category(label: &str) -> TagCategory {
    infer_with_rules(label, CATEGORY_RULES)
}

/// Runs inference against an arbitrary rule table.
pub fn infer_with_rules(label: &str, rules: &[CategoryRule]) -> TagCategory {
    let lowered = label.to_lowercase();

    rules
        .iter()
        .find(|rule| rules_match(rule, &lowered))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}

fn rules_match(rule: &CategoryRule, lowered: &str) -> bool {
    rule.keywords.iter().any(|keyword| lowered.contains(keyword))
}
