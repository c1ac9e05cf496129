//! Persisted record types for the favorites file.
//!
//! This module defines [`FavoriteRecord`], the minimal subset of an image
//! item that survives a session. Records are kept separate from the domain
//! [`ImageItem`](crate::domain::ImageItem) so the on-disk format stays a
//! deliberate, versionable boundary rather than whatever the API returned.

use crate::domain::{Breed, ImageItem};
use serde::{Deserialize, Serialize};

/// The minimal persisted subset of an image a user has starred.
///
/// Invariant: the favorites list holds at most one record per `id` (set
/// semantics keyed by id), newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Upstream image identifier; the record's identity.
    pub id: String,

    /// URL of the image file.
    pub url: String,

    /// Breed metadata the item carried when it was starred. Empty when the
    /// item had none; the display fallback enrichment is never persisted
    /// retroactively.
    #[serde(default)]
    pub breeds: Vec<Breed>,

    /// Unix timestamp (seconds) when the record was created. Defaults to 0
    /// when loading files written before this field existed.
    #[serde(default)]
    pub saved_at: i64,
}

impl FavoriteRecord {
    /// Builds a record from a fetched image item, stamped with the current time.
    #[must_use]
    pub fn from_item(item: &ImageItem) -> Self {
        Self {
            id: item.id.clone(),
            url: item.url.clone(),
            breeds: item.breeds.clone(),
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Reconstructs a displayable image item from this record.
    ///
    /// Used when the user opens the detail view from the favorites panel,
    /// where no live gallery item exists for the id.
    #[must_use]
    pub fn to_item(&self) -> ImageItem {
        ImageItem {
            id: self.id.clone(),
            url: self.url.clone(),
            breeds: self.breeds.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_item_copies_identity_and_breeds() {
        let item = ImageItem {
            id: "abc".to_string(),
            url: "http://x/abc.jpg".to_string(),
            breeds: vec![Breed {
                id: "abys".to_string(),
                name: "Abyssinian".to_string(),
                ..Breed::default()
            }],
        };

        let record = FavoriteRecord::from_item(&item);
        assert_eq!(record.id, "abc");
        assert_eq!(record.url, "http://x/abc.jpg");
        assert_eq!(record.breeds.len(), 1);
        assert!(record.saved_at > 0);
        assert_eq!(record.to_item(), item);
    }

    #[test]
    fn loads_records_without_saved_at() {
        let record: FavoriteRecord =
            serde_json::from_str(r#"{"id":"abc","url":"http://x/abc.jpg","breeds":[]}"#)
                .expect("legacy record should deserialize");
        assert_eq!(record.saved_at, 0);
    }
}
