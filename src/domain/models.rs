//! Core domain types for breeds and fetched images.
//!
//! This module defines the two immutable records the gallery works with:
//! [`Breed`], the static metadata describing a cat breed, and [`ImageItem`],
//! a single fetched image result that optionally embeds a breed. Both mirror
//! the JSON shapes returned by The Cat API; unknown fields are ignored and
//! missing optional fields default to empty strings so partial API payloads
//! never fail deserialization.

use serde::{Deserialize, Serialize};

/// Breed weight information as reported by the upstream API.
///
/// Only the metric range is used for display (e.g. `"3 - 5"` kilograms).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedWeight {
    /// Weight range in kilograms, as a free-form string.
    #[serde(default)]
    pub metric: String,
}

/// Static metadata record describing a cat breed.
///
/// Breeds are fetched once at startup from `GET {base}/breeds` and never
/// mutated afterwards; the catalog lives for the session. All descriptive
/// fields are free-form strings supplied by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Short breed identifier used in search queries (e.g. `"abys"`).
    pub id: String,

    /// Human-readable breed name (e.g. `"Abyssinian"`).
    pub name: String,

    /// Comma-separated temperament traits.
    #[serde(default)]
    pub temperament: String,

    /// Country or region of origin.
    #[serde(default)]
    pub origin: String,

    /// Expected life span range in years, as a free-form string.
    #[serde(default)]
    pub life_span: String,

    /// Weight information.
    #[serde(default)]
    pub weight: BreedWeight,

    /// Long-form breed description.
    #[serde(default)]
    pub description: String,
}

/// One fetched image result, optionally carrying an embedded breed.
///
/// Identity is the `id` field; items are immutable once fetched. The upstream
/// API embeds at most one breed per image, and sometimes omits it even when
/// the search was filtered by breed — see the fallback enrichment in
/// [`crate::api`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Upstream image identifier.
    pub id: String,

    /// URL of the image file.
    pub url: String,

    /// Embedded breed metadata, 0 or 1 element in practice.
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

impl ImageItem {
    /// Returns the embedded breed, if any.
    #[must_use]
    pub fn breed(&self) -> Option<&Breed> {
        self.breeds.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_image_payload() {
        let item: ImageItem = serde_json::from_str(r#"{"id":"abc","url":"http://x/abc.jpg"}"#)
            .expect("minimal payload should deserialize");
        assert_eq!(item.id, "abc");
        assert!(item.breeds.is_empty());
        assert!(item.breed().is_none());
    }

    #[test]
    fn deserializes_breed_with_missing_optional_fields() {
        let breed: Breed = serde_json::from_str(r#"{"id":"abys","name":"Abyssinian"}"#)
            .expect("partial breed should deserialize");
        assert_eq!(breed.id, "abys");
        assert_eq!(breed.temperament, "");
        assert_eq!(breed.weight.metric, "");
    }

    #[test]
    fn ignores_unknown_api_fields() {
        let item: ImageItem = serde_json::from_str(
            r#"{"id":"xyz","url":"http://x/xyz.png","width":640,"height":480}"#,
        )
        .expect("extra fields should be ignored");
        assert_eq!(item.url, "http://x/xyz.png");
    }
}
