//! Ingestion Module Tests
//!
//! ## Test Scopes
//! - **Classification**: Present, absent, `null` and non-object metadata; lenient fields.
//! - **Normalizer**: Field mapping, fallbacks, tag ids and inferred categories.
//! - **Fixtures**: Invariants of the static gallery.
//! - **Explorer client**: URL construction and configuration checks.
//!
//! *Note: Live explorer requests are not exercised here.*

#[cfg(test)]
mod tests {
    use crate::ingestion::explorer::{ExplorerClient, ZERO_ADDRESS};
    use crate::ingestion::fixtures::mock_tattoos;
    use crate::ingestion::handlers::handle_import;
    use crate::ingestion::normalizer::{build_tags, normalize, normalize_all};
    use crate::ingestion::types::{ImportRequest, MetadataPayload, RawRecord};
    use crate::search::dates::parse_minted_date;
    use crate::storage::memory::TattooStore;
    use crate::tags::TagCategory;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn raw(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).expect("raw record should deserialize")
    }

    fn full_instance() -> RawRecord {
        raw(json!({
            "id": "42",
            "token": {
                "address": "0xcontract",
                "name": "Tattoos",
                "symbol": "TAT",
                "type": "ERC-721"
            },
            "metadata": {
                "name": "Koi Pond",
                "description": "Two koi circling",
                "image": "ipfs://koi.png",
                "attributes": [{ "trait_type": "Style", "value": "Japanese" }],
                "story": "Got this after moving to Osaka.",
                "tags": ["Japanese", "Back", "Koi", "Vibrant"],
                "artist": "Horiyoshi",
                "location": "Osaka",
                "soul_bound": true,
                "original_owner": "0xowner",
                "mint_date": "2024-04-01",
                "tip_count": 3,
                "view_count": 120
            },
            "owner": { "hash": "0xowner" },
            "image_url": "https://cdn/koi.png"
        }))
    }

    // ============================================================
    // CLASSIFICATION TESTS
    // ============================================================

    #[test]
    fn test_payload_present() {
        assert!(matches!(full_instance().payload(), MetadataPayload::Present(_)));
    }

    #[test]
    fn test_payload_absent_variants() {
        let missing = raw(json!({ "id": "1" }));
        let null = raw(json!({ "id": "2", "metadata": null }));
        let not_object = raw(json!({ "id": "3", "metadata": "ipfs://broken" }));
        let array = raw(json!({ "id": "4", "metadata": ["Koi"] }));

        for record in [missing, null, not_object, array] {
            assert!(matches!(record.payload(), MetadataPayload::Absent));
            assert!(normalize(&record).is_none(), "record {} should be skipped", record.id);
        }
    }

    fn koi_with(extra: serde_json::Value) -> RawRecord {
        let mut metadata = json!({ "name": "Koi", "tags": ["Back"] });
        if let (Some(base), Some(extra)) = (metadata.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        raw(json!({ "id": "9", "metadata": metadata, "owner": { "hash": "0xkoi" } }))
    }

    #[test]
    fn test_null_tags_keep_record() {
        let tattoo = normalize(&koi_with(json!({ "tags": null }))).expect("record is kept");
        assert_eq!(tattoo.title, "Koi");
        assert!(tattoo.tags.is_empty());
    }

    #[test]
    fn test_wrong_typed_tags_keep_record() {
        let tattoo = normalize(&koi_with(json!({ "tags": 7 }))).expect("record is kept");
        assert!(tattoo.tags.is_empty());

        let mixed = normalize(&koi_with(json!({ "tags": ["Arm", 3, null, "Rose"] }))).unwrap();
        let labels: Vec<&str> = mixed.tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Arm", "Rose"]);
    }

    #[test]
    fn test_null_soul_bound_keeps_record() {
        let tattoo = normalize(&koi_with(json!({ "soul_bound": null }))).expect("record is kept");
        assert!(!tattoo.is_soul_bound);
    }

    #[test]
    fn test_float_and_string_counts() {
        let tattoo = normalize(&koi_with(json!({
            "tip_count": 3.0,
            "view_count": "12",
            "share_count": -1
        })))
        .expect("record is kept");

        assert_eq!(tattoo.tip_count, 3);
        assert_eq!(tattoo.view_count, 12);
        assert_eq!(tattoo.share_count, 0);
    }

    #[test]
    fn test_unreadable_attributes_are_ignored() {
        let record = koi_with(json!({ "attributes": [{ "value": "Japanese" }, 5] }));
        assert!(matches!(record.payload(), MetadataPayload::Present(_)));
        assert_eq!(normalize(&record).unwrap().tags.len(), 1);
    }

    #[test]
    fn test_null_text_fields_fall_back() {
        let tattoo = normalize(&koi_with(json!({
            "name": null,
            "story": null,
            "description": "Koi in ink",
            "mint_date": null
        })))
        .expect("record is kept");

        assert_eq!(tattoo.title, "Tattoo #9");
        assert_eq!(tattoo.story, "Koi in ink");
        assert_eq!(tattoo.minted_date, "");
    }

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_maps_fields() {
        let tattoo = normalize(&full_instance()).expect("instance has metadata");

        assert_eq!(tattoo.id, "42");
        assert_eq!(tattoo.token_id, Some(42));
        assert_eq!(tattoo.contract_address.as_deref(), Some("0xcontract"));
        assert_eq!(tattoo.title, "Koi Pond");
        assert_eq!(tattoo.description, "Two koi circling");
        assert_eq!(tattoo.story, "Got this after moving to Osaka.");
        assert_eq!(tattoo.image_url, "ipfs://koi.png");
        assert_eq!(tattoo.owner, "0xowner");
        assert_eq!(tattoo.owner_address, "0xowner");
        assert_eq!(tattoo.artist.as_deref(), Some("Horiyoshi"));
        assert_eq!(tattoo.location.as_deref(), Some("Osaka"));
        assert!(tattoo.is_soul_bound);
        assert_eq!(tattoo.minted_date, "2024-04-01");
        assert_eq!(tattoo.tip_count, 3);
        assert_eq!(tattoo.view_count, 120);
        assert_eq!(tattoo.share_count, 0);
    }

    #[test]
    fn test_normalize_tags_ids_and_categories() {
        let tattoo = normalize(&full_instance()).unwrap();

        let summary: Vec<(&str, &str, TagCategory)> = tattoo
            .tags
            .iter()
            .map(|t| (t.id.as_str(), t.label.as_str(), t.category))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Japanese-0", "Japanese", TagCategory::Style),
                ("Back-1", "Back", TagCategory::BodyPart),
                ("Koi-2", "Koi", TagCategory::Theme),
                ("Vibrant-3", "Vibrant", TagCategory::Color),
            ]
        );
    }

    #[test]
    fn test_normalize_fallbacks() {
        let record = raw(json!({
            "id": "7",
            "metadata": { "name": "  ", "description": "Only a description" },
            "image_url": "https://cdn/7.png"
        }));

        let tattoo = normalize(&record).unwrap();
        assert_eq!(tattoo.title, "Tattoo #7");
        assert_eq!(tattoo.story, "Only a description");
        assert_eq!(tattoo.image_url, "https://cdn/7.png");
        assert_eq!(tattoo.owner, "");
        assert!(tattoo.tags.is_empty());
        assert!(!tattoo.is_soul_bound);
        assert_eq!(tattoo.minted_date, "");
        assert!(tattoo.minted_at().is_none());
    }

    #[test]
    fn test_build_tags_drops_blank_and_duplicate_labels() {
        let raw_tags: Vec<String> = ["Arm", "  ", "arm", " Rose ", "ROSE", "Tiny"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let tags = build_tags(&raw_tags).into_vec();
        let ids: Vec<&str> = tags.iter().map(|t| t.id.as_str()).collect();

        // Ids keep the raw position even after skipped entries
        assert_eq!(ids, vec!["Arm-0", "Rose-3", "Tiny-5"]);

        let unique: HashSet<String> = tags.iter().map(|t| t.label.to_lowercase()).collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_build_tags_is_not_capped() {
        let raw_tags: Vec<String> = (0..40).map(|i| format!("tag {}", i)).collect();
        assert_eq!(build_tags(&raw_tags).len(), 40);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let instance = full_instance();
        let first = normalize(&instance).unwrap();
        let second = normalize(&instance).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_all_skips_without_failing() {
        let raws = vec![
            full_instance(),
            raw(json!({ "id": "9", "metadata": null })),
            raw(json!({ "id": "10", "metadata": { "name": "Rose", "tags": ["Rose"] } })),
        ];

        let tattoos = normalize_all(&raws);
        let ids: Vec<&str> = tattoos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["42", "10"]);
    }

    // ============================================================
    // FIXTURE TESTS
    // ============================================================

    #[test]
    fn test_fixtures_are_well_formed() {
        let tattoos = mock_tattoos();
        assert!(!tattoos.is_empty());

        let ids: HashSet<&str> = tattoos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tattoos.len(), "ids must be unique");

        for tattoo in &tattoos {
            assert!(!tattoo.title.is_empty());
            assert!(!tattoo.story.is_empty());
            assert!(tattoo.image_url.ends_with(".jpg"));
            assert!(!tattoo.tags.is_empty());
            assert!(tattoo.minted_at().is_some(), "{} has a bad date", tattoo.id);

            let labels: HashSet<String> =
                tattoo.tags.iter().map(|t| t.label.to_lowercase()).collect();
            assert_eq!(labels.len(), tattoo.tags.len());
        }
    }

    #[test]
    fn test_fixture_phoenix_rising() {
        let tattoos = mock_tattoos();
        let phoenix = tattoos
            .iter()
            .find(|t| t.title == "Phoenix Rising")
            .expect("fixture should contain Phoenix Rising");

        assert_eq!(phoenix.owner, "Alex Chen");
        assert!(phoenix.is_soul_bound);
        assert_eq!(phoenix.tags[0].id, "1-1");
        assert_eq!(phoenix.tags[0].category, TagCategory::Style);
        assert_eq!(
            phoenix.minted_at(),
            parse_minted_date("2024-01-15")
        );
    }

    // ============================================================
    // EXPLORER CLIENT TESTS
    // ============================================================

    #[test]
    fn test_explorer_urls() {
        let client = ExplorerClient::new("https://explorer.test/api/v2/", "0xabc");

        assert_eq!(
            client.instances_url(50, 25),
            "https://explorer.test/api/v2/tokens/0xabc/instances?offset=50&limit=25"
        );
    }

    #[test]
    fn test_explorer_configuration() {
        assert!(ExplorerClient::new("https://x", "0xabc").is_configured());
        assert!(!ExplorerClient::new("https://x", ZERO_ADDRESS).is_configured());
        assert!(!ExplorerClient::new("https://x", "").is_configured());
    }

    // ============================================================
    // IMPORT HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_import_counts_skipped() {
        let store = Arc::new(TattooStore::with_records(mock_tattoos()).await);
        let req = ImportRequest {
            items: vec![full_instance(), raw(json!({ "id": "99" }))],
        };

        let (status, Json(response)) = handle_import(Extension(store.clone()), Json(req)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.imported, 1);
        assert_eq!(response.skipped, 1);
        assert_eq!(response.total_records, mock_tattoos().len() + 1);
        assert!(store.get("42").await.is_some());
        assert!(store.get("99").await.is_none());
    }
}
