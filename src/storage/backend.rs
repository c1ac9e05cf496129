//! Storage backend abstraction for the favorites list.
//!
//! This module defines the [`FavoritesStore`] trait that abstracts over
//! persistence backends, keeping the state machine testable without a real
//! filesystem. The trait is minimal by design: the gallery only ever reads
//! the whole list at startup and rewrites the whole list after a mutation.

use crate::domain::Result;
use crate::storage::models::FavoriteRecord;

/// Abstraction over favorites persistence backends.
///
/// The default (and currently only) implementation is
/// [`JsonFavorites`](crate::storage::JsonFavorites), a single JSON file with
/// atomic writes.
pub trait FavoritesStore: Send {
    /// Reads the full favorites list.
    ///
    /// Never fails the caller: a missing file or malformed content degrades
    /// to an empty list with a logged warning, matching the recovery policy
    /// for corrupt local storage.
    fn load(&self) -> Vec<FavoriteRecord>;

    /// Writes the full favorites list, replacing any previous contents.
    ///
    /// Called after every mutation; the list is small enough that rewriting
    /// it wholesale is cheaper than tracking deltas.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails. Callers
    /// treat this as non-fatal and keep the in-memory list authoritative.
    fn save(&mut self, records: &[FavoriteRecord]) -> Result<()>;
}
