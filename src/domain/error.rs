//! Error types for the cat gallery.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// User-visible message shown when the breed catalog request fails.
pub const BREEDS_FETCH_ERROR: &str = "No se pudieron cargar las razas";

/// User-visible message shown when an image search request fails.
pub const IMAGES_FETCH_ERROR: &str = "No pudimos cargar las imágenes. Intenta nuevamente.";

/// The main error type for gallery operations.
///
/// This enum consolidates all error conditions that can occur while fetching
/// from the upstream API, persisting favorites, or loading configuration.
/// No variant is fatal to the application: network failures surface as a
/// user-visible message string, and storage failures degrade to an empty
/// favorites list at the call site.
///
/// # Examples
///
/// ```
/// use cat_gallery::domain::{GalleryError, Result};
///
/// fn validate_config() -> Result<()> {
///     Err(GalleryError::Config("missing api_base".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// An upstream HTTP request failed.
    ///
    /// Covers both transport failures and non-success status codes. The
    /// string is one of the fixed user-facing messages
    /// ([`BREEDS_FETCH_ERROR`] or [`IMAGES_FETCH_ERROR`]); the underlying
    /// cause is logged at the point of failure rather than propagated.
    #[error("Network error: {0}")]
    Network(String),

    /// Favorites storage operation failed.
    ///
    /// Occurs when serializing or writing the favorites file fails. Reads
    /// never produce this error; malformed content degrades to an empty list.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be parsed or contains
    /// malformed values. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for gallery operations.
///
/// This is a type alias for `std::result::Result<T, GalleryError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, GalleryError>;
