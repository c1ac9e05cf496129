//! Storage layer for the persisted favorites list.
//!
//! This module provides the persistence abstraction for the user's starred
//! images: a trait boundary so tests can inject an in-memory backend, a JSON
//! file implementation with atomic writes, and the persisted record model.
//! The list is read once at startup and rewritten after every mutation; it
//! outlives a single session but carries no durability guarantee beyond a
//! best-effort local file.
//!
//! # Modules
//!
//! - `backend`: [`FavoritesStore`] trait abstraction
//! - `json`: JSON file-based implementation
//! - `models`: Persisted record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::FavoritesStore;
pub use json::{JsonFavorites, FAVORITES_FILE};
pub use models::FavoriteRecord;
