//! Tag Module Tests
//!
//! ## Test Scopes
//! - **Inference**: Keyword matching and the priority order of the rule table.
//! - **TagSet**: Trimming, case-insensitive de-duplication and the size cap.
//! - **Catalog**: Coverage of every category.

#[cfg(test)]
mod tests {
    use crate::tags::catalog::{popular_tag_catalog, popular_tags};
    use crate::tags::inference::{CategoryRule, infer_category, infer_with_rules};
    use crate::tags::types::{MAX_TAGS_PER_TATTOO, Tag, TagCategory, TagSet};

    // ============================================================
    // INFERENCE TESTS
    // ============================================================

    #[test]
    fn test_infer_style_keywords() {
        assert_eq!(infer_category("Traditional"), TagCategory::Style);
        assert_eq!(infer_category("Neo-Traditional"), TagCategory::Style);
        assert_eq!(infer_category("WATERCOLOR"), TagCategory::Style);
        assert_eq!(infer_category("geometric"), TagCategory::Style);
    }

    #[test]
    fn test_infer_body_part_keywords() {
        assert_eq!(infer_category("Arm"), TagCategory::BodyPart);
        assert_eq!(infer_category("Forearm"), TagCategory::BodyPart);
        assert_eq!(infer_category("Ankle"), TagCategory::BodyPart);
    }

    #[test]
    fn test_infer_color_and_size_keywords() {
        assert_eq!(infer_category("Pastel"), TagCategory::Color);
        assert_eq!(infer_category("Grey wash"), TagCategory::Color);
        assert_eq!(infer_category("Tiny"), TagCategory::Size);
        assert_eq!(infer_category("Half Sleeve"), TagCategory::Size);
    }

    #[test]
    fn test_infer_body_part_beats_color() {
        // "black" is a Color keyword, "arm" a BodyPart keyword
        assert_eq!(infer_category("black arm"), TagCategory::BodyPart);
    }

    #[test]
    fn test_infer_style_beats_color() {
        assert_eq!(infer_category("Japanese Black"), TagCategory::Style);
    }

    #[test]
    fn test_infer_substring_matches_inside_words() {
        // "Blackwork" contains "black"
        assert_eq!(infer_category("Blackwork"), TagCategory::Color);
        // "Colorful" contains "color"
        assert_eq!(infer_category("Colorful"), TagCategory::Color);
        // "Full Back" contains "back" which is tested before "full"
        assert_eq!(infer_category("Full Back"), TagCategory::BodyPart);
    }

    #[test]
    fn test_infer_defaults_to_theme() {
        assert_eq!(infer_category("Phoenix"), TagCategory::Theme);
        assert_eq!(infer_category(""), TagCategory::Theme);
        assert_eq!(infer_category("Love"), TagCategory::Theme);
    }

    #[test]
    fn test_infer_with_custom_rules_respects_order() {
        let rules = [
            CategoryRule {
                category: TagCategory::Meaning,
                keywords: &["love"],
            },
            CategoryRule {
                category: TagCategory::Artist,
                keywords: &["glove"],
            },
        ];

        assert_eq!(infer_with_rules("Glove", &rules), TagCategory::Meaning);
        assert_eq!(infer_with_rules("nothing", &rules), TagCategory::Theme);
        assert_eq!(infer_with_rules("anything", &[]), TagCategory::Theme);
    }

    // ============================================================
    // CATEGORY TESTS
    // ============================================================

    #[test]
    fn test_category_serialization_is_snake_case() {
        let json = serde_json::to_string(&TagCategory::BodyPart).unwrap();
        assert_eq!(json, "\"body_part\"");

        let restored: TagCategory = serde_json::from_str("\"meaning\"").unwrap();
        assert_eq!(restored, TagCategory::Meaning);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("style".parse::<TagCategory>(), Ok(TagCategory::Style));
        assert_eq!(" Body_Part ".parse::<TagCategory>(), Ok(TagCategory::BodyPart));
        assert!("colour".parse::<TagCategory>().is_err());
    }

    #[test]
    fn test_tag_matches_label_case_insensitively() {
        let tag = Tag::new("1-1", "Realism", TagCategory::Style);
        assert!(tag.matches_label("realism"));
        assert!(tag.matches_label("REALISM"));
        assert!(!tag.matches_label("Realist"));
    }

    #[test]
    fn test_tag_matches_non_ascii_labels() {
        let tag = Tag::new("1-1", "Été", TagCategory::Theme);
        assert!(tag.matches_label("ÉTÉ"));
        assert!(tag.matches_label("été"));
        assert!(!tag.matches_label("ete"));
        assert!(!tag.matches_label("Été "));
    }

    #[test]
    fn test_tag_count_omitted_when_absent() {
        let tag = Tag::new("1-1", "Realism", TagCategory::Style);
        let json = serde_json::to_value(&tag).unwrap();
        assert!(json.get("count").is_none());
    }

    // ============================================================
    // TAGSET TESTS
    // ============================================================

    #[test]
    fn test_tagset_trims_and_rejects_empty() {
        let mut set = TagSet::new();

        assert!(set.push("a", "  Nature  ", TagCategory::Theme));
        assert!(!set.push("b", "   ", TagCategory::Theme));

        assert_eq!(set.labels(), vec!["Nature"]);
    }

    #[test]
    fn test_tagset_rejects_case_insensitive_duplicates() {
        let mut set = TagSet::new();

        assert!(set.push("a", "Arm", TagCategory::BodyPart));
        assert!(!set.push("b", "ARM", TagCategory::BodyPart));
        assert!(!set.push("c", " arm ", TagCategory::BodyPart));

        assert_eq!(set.len(), 1);
        assert!(set.contains_label("aRm"));
    }

    #[test]
    fn test_tagset_respects_cap() {
        let mut set = TagSet::new();
        for i in 0..MAX_TAGS_PER_TATTOO {
            assert!(set.push(format!("t-{}", i), &format!("label {}", i), TagCategory::Theme));
        }

        assert!(set.is_full());
        assert!(!set.push("overflow", "one more", TagCategory::Theme));
        assert_eq!(set.len(), MAX_TAGS_PER_TATTOO);
    }

    #[test]
    fn test_tagset_remove_frees_label() {
        let mut set = TagSet::with_capacity_limit(1);
        set.push("a", "Arm", TagCategory::BodyPart);

        let removed = set.remove("a").expect("tag should be removed");
        assert_eq!(removed.label, "Arm");
        assert!(set.is_empty());
        assert!(set.remove("a").is_none());

        assert!(set.push("b", "arm", TagCategory::BodyPart));
    }

    // ============================================================
    // CATALOG TESTS
    // ============================================================

    #[test]
    fn test_catalog_covers_every_category() {
        let catalog = popular_tag_catalog();
        assert_eq!(catalog.len(), TagCategory::ALL.len());

        for category in TagCategory::ALL {
            let labels = popular_tags(category);
            if category == TagCategory::Artist {
                assert!(labels.is_empty());
            } else {
                assert!(!labels.is_empty(), "{} should have suggestions", category);
            }
            assert!(labels.len() < 50);
        }
    }

    #[test]
    fn test_catalog_contains_expected_labels() {
        assert!(popular_tags(TagCategory::Style).contains(&"Japanese"));
        assert!(popular_tags(TagCategory::BodyPart).contains(&"Forearm"));
        assert!(popular_tags(TagCategory::Theme).contains(&"Mythology"));
    }
}
