//! Ingestion Data Types
//!
//! Raw shapes as served by the block explorer's NFT instance endpoint, plus the
//! request/response bodies of the import endpoint.

use serde::{Deserialize, Serialize};

/// One NFT instance as returned by the explorer.
///
/// `metadata` is kept as loose JSON: the token URI content is user supplied and
/// may be missing, `null`, or not an object at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub token: Option<RawToken>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub owner: Option<RawOwner>,
    #[serde(default)]
    pub external_app_url: Option<String>,
    #[serde(default)]
    pub animation_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawToken {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOwner {
    pub hash: String,
}

/// Token metadata document of a tattoo NFT.
///
/// Every field tolerates `null` and values of the wrong JSON type, which read as
/// the field's default. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub story: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub studio: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub soul_bound: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub mint_date: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub tip_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub view_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub share_count: Option<u64>,
}

/// Whether a raw record carries usable metadata.
#[derive(Debug, Clone)]
pub enum MetadataPayload {
    Present(RawMetadata),
    Absent,
}

impl RawRecord {
    /// Classifies the metadata. Only a missing document, `null`, or a value that
    /// is not a JSON object is `Absent`.
    pub fn payload(&self) -> MetadataPayload {
        match &self.metadata {
            Some(value @ serde_json::Value::Object(_)) => {
                match serde_json::from_value::<RawMetadata>(value.clone()) {
                    Ok(metadata) => MetadataPayload::Present(metadata),
                    Err(e) => {
                        tracing::debug!("Unreadable metadata on instance {}: {}", self.id, e);
                        MetadataPayload::Absent
                    }
                }
            }
            _ => MetadataPayload::Absent,
        }
    }
}

/// Field readers for user-supplied metadata.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Keeps the string entries of an array; anything else is an empty list.
    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }

    /// Non-negative integers, whole floats (`3.0`) and numeric strings.
    pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

/// A page of the explorer's instance listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstancePage {
    #[serde(default)]
    pub items: Vec<RawRecord>,
}

/// Body of `POST /tattoos/import`.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub items: Vec<RawRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub skipped: usize,
    pub total_records: usize,
}
