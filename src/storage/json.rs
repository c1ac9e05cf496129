//! JSON file-based favorites storage.
//!
//! Persists the favorites list as a single human-readable JSON array, the
//! same shape the original browser build kept under its local-storage key.
//! Writes go to a temporary file first and are renamed into place, so a
//! crash mid-write never leaves a corrupt favorites file.

use crate::domain::{GalleryError, Result};
use crate::storage::backend::FavoritesStore;
use crate::storage::models::FavoriteRecord;
use std::path::PathBuf;

/// File name of the favorites list within the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// JSON file storage backend for favorites.
///
/// The whole list is rewritten on every save; reads happen once at startup.
/// Malformed or missing content always degrades to an empty list.
pub struct JsonFavorites {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonFavorites {
    /// Creates a favorites store backed by the given file.
    ///
    /// Parent directories are created eagerly so the first save cannot fail
    /// on a missing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing favorites storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl FavoritesStore for JsonFavorites {
    fn load(&self) -> Vec<FavoriteRecord> {
        let contents = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.file_path, "no favorites file yet");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites file, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FavoriteRecord>>(&contents) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "favorites loaded");
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed favorites file, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[FavoriteRecord]) -> Result<()> {
        let _span = tracing::debug_span!("save_favorites", count = records.len()).entered();

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| GalleryError::Storage(format!("failed to serialize favorites: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("favorites saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageItem;

    fn store_in(dir: &tempfile::TempDir) -> JsonFavorites {
        JsonFavorites::new(dir.path().join(FAVORITES_FILE)).expect("storage should initialize")
    }

    fn record(id: &str) -> FavoriteRecord {
        FavoriteRecord::from_item(&ImageItem {
            id: id.to_string(),
            url: format!("http://x/{id}.jpg"),
            breeds: vec![],
        })
    }

    #[test]
    fn load_on_missing_file_returns_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);

        let records = vec![record("abc"), record("def")];
        store.save(&records).expect("save should succeed");

        assert_eq!(store.load(), records);
    }

    #[test]
    fn load_on_malformed_content_returns_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        std::fs::write(store.path(), "{not json at all").expect("write");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);

        store.save(&[record("abc"), record("def")]).expect("save");
        store.save(&[record("ghi")]).expect("save");

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "ghi");
    }

    #[test]
    fn toggled_favorite_is_first_after_reload() {
        use crate::app::{handle_event, Action, AppState, Event};

        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);

        let mut state = AppState::new(store.load());
        state.items = vec![ImageItem {
            id: "abc".to_string(),
            url: "http://x/abc.jpg".to_string(),
            breeds: vec![],
        }];

        let (_, actions) = handle_event(
            &mut state,
            &Event::ToggleFavorite {
                id: "abc".to_string(),
            },
        )
        .expect("toggle");
        match &actions[..] {
            [Action::PersistFavorites(records)] => store.save(records).expect("save"),
            other => panic!("expected a persist action, got {other:?}"),
        }

        let reloaded = store.load();
        assert_eq!(reloaded[0].id, "abc");
        assert_eq!(reloaded[0].url, "http://x/abc.jpg");
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b").join(FAVORITES_FILE);
        let mut store = JsonFavorites::new(nested).expect("nested storage should initialize");
        store.save(&[record("abc")]).expect("save");
        assert_eq!(store.load().len(), 1);
    }
}
