//! Domain layer for the cat gallery.
//!
//! This module contains the core domain types and error taxonomy, independent
//! of the HTTP client, storage backend, or terminal rendering. It follows
//! domain-driven design principles by keeping the data model isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`models`]: Breed and image records mirroring the upstream API shapes

pub mod error;
pub mod models;

pub use error::{GalleryError, Result, BREEDS_FETCH_ERROR, IMAGES_FETCH_ERROR};
pub use models::{Breed, BreedWeight, ImageItem};
