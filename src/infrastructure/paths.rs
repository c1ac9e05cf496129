//! Platform path resolution for storage and configuration.
//!
//! This module decides where the favorites file and the optional TOML
//! configuration live, following the platform conventions reported by the
//! `dirs` crate (`~/.local/share` and `~/.config` on Linux). Callers can
//! override the data directory through configuration; these functions only
//! provide the defaults.

use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
const APP_DIR: &str = "cat-gallery";

/// Returns the default data directory for gallery storage.
///
/// Resolves to `<platform data dir>/cat-gallery`, e.g.
/// `~/.local/share/cat-gallery` on Linux. Falls back to a relative
/// `.cat-gallery` directory when the platform reports no data directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".cat-gallery"))
}

/// Returns the default configuration file path.
///
/// Resolves to `<platform config dir>/cat-gallery/config.toml`, e.g.
/// `~/.config/cat-gallery/config.toml` on Linux. Returns `None` when the
/// platform reports no config directory.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_dir() {
        assert!(default_data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn config_file_is_toml_under_app_dir() {
        if let Some(path) = default_config_file() {
            assert!(path.ends_with("cat-gallery/config.toml"));
        }
    }
}
