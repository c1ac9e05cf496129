//! cat-gallery: a terminal gallery for The Cat API.
//!
//! The crate lets a user browse cat images from the public Cat API, filter by
//! breed, order, and image type, page through results with an explicit
//! advance-page signal, star favorites persisted to a local JSON file, and
//! inspect breed detail for any image.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (main.rs)                                  │  ← Command loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, pagination control               │
//! │  - Filter state, favorites toggling                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - View models │   │ - JSON file   │   │ - reqwest     │
//! │ - Rendering   │   │ - Store trait │   │ - Enrichment  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, breed/image models (domain/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! All state lives in one [`AppState`] mutated exclusively by
//! [`handle_event`]. User commands and fetch completions become [`Event`]s;
//! the handler returns [`Action`]s (HTTP fetches, favorites persistence)
//! that the runtime executes on the tokio event loop, feeding results back
//! in as events. Fetches are keyed by an epoch so responses that outlive
//! their filter session are discarded instead of corrupting the list.
//!
//! # Example
//!
//! ```
//! use cat_gallery::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config, vec![]);
//!
//! // Startup issues the breed-catalog fetch and the page-0 search.
//! let (_, actions) = handle_event(&mut state, &Event::Started)?;
//! assert!(actions.contains(&Action::FetchBreeds));
//! # Ok::<(), cat_gallery::domain::GalleryError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterState, MimeType, SortOrder};
pub use domain::{Breed, GalleryError, ImageItem, Result};
pub use storage::{FavoriteRecord, FavoritesStore, JsonFavorites};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default base URL of the upstream API.
pub const DEFAULT_API_BASE: &str = "https://api.thecatapi.com/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable consulted for the API key when the config has none.
const API_KEY_ENV: &str = "CAT_API_KEY";

/// Application configuration.
///
/// Loaded from `~/.config/cat-gallery/config.toml` when present, otherwise
/// defaults. All fields are optional in the file; unset values fall back to
/// the defaults documented per field.
///
/// # Example
///
/// ```toml
/// # ~/.config/cat-gallery/config.toml
/// api_base = "https://api.thecatapi.com/v1"
/// page_size = 9
/// request_timeout_secs = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream API. Default: [`DEFAULT_API_BASE`].
    pub api_base: String,

    /// Images requested per search page. Default: 9.
    pub page_size: u32,

    /// End-to-end timeout applied to every HTTP request, in seconds.
    /// Default: 10.
    pub request_timeout_secs: u64,

    /// Optional API key sent as `x-api-key`. Falls back to the
    /// `CAT_API_KEY` environment variable; the public endpoints work
    /// without one at reduced rate limits.
    pub api_key: Option<String>,

    /// Override for the data directory holding `favorites.json`.
    /// Default: the platform data directory (see
    /// [`infrastructure::default_data_dir`]).
    pub data_dir: Option<PathBuf>,

    /// Tracing level when `RUST_LOG` is unset. Default: `"warn"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: api::DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
            data_dir: None,
            trace_level: None,
        }
    }
}

/// Raw TOML shape of the config file; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base: Option<String>,
    page_size: Option<u32>,
    request_timeout_secs: Option<u64>,
    api_key: Option<String>,
    data_dir: Option<PathBuf>,
    trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// Reads `~/.config/cat-gallery/config.toml` when it exists; a missing
    /// file yields the defaults. The API key additionally falls back to the
    /// `CAT_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the file exists but cannot be
    /// read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = match infrastructure::default_config_file() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the file cannot be read or is not
    /// valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("failed to read {}: {e}", path.display())))?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| GalleryError::Config(format!("failed to parse {}: {e}", path.display())))?;

        let defaults = Self::default();
        Ok(Self {
            api_base: file.api_base.unwrap_or(defaults.api_base),
            page_size: file.page_size.unwrap_or(defaults.page_size),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            api_key: file.api_key,
            data_dir: file.data_dir,
            trace_level: file.trace_level,
        })
    }

    /// Returns the directory holding the favorites file.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::default_data_dir)
    }
}

/// Creates the initial application state.
///
/// Builds an [`AppState`] from the favorites restored out of storage and the
/// configured page size. The breed catalog and first page are fetched by the
/// startup event, not here.
#[must_use]
pub fn initialize(config: &Config, favorites: Vec<FavoriteRecord>) -> AppState {
    tracing::debug!(
        favorite_count = favorites.len(),
        page_size = config.page_size,
        "initializing gallery state"
    );

    let mut state = AppState::new(favorites);
    state.page_size = config.page_size;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.page_size, 9);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn from_file_merges_partial_toml_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 12\ntrace_level = \"debug\"\n").expect("write");

        let config = Config::from_file(&path).expect("config should parse");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn from_file_rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = [not valid").expect("write");

        assert!(matches!(
            Config::from_file(&path),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn initialize_applies_configured_page_size() {
        let config = Config {
            page_size: 4,
            ..Config::default()
        };
        let state = initialize(&config, vec![]);
        assert_eq!(state.page_size, 4);
        assert!(state.items.is_empty());
    }
}
