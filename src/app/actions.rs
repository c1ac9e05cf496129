//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions bridge the pure
//! state transitions and the effectful operations: HTTP fetches against the
//! upstream API and favorites persistence. The runtime executes the returned
//! actions in sequence and feeds fetch completions back in as events.

use crate::api::SearchRequest;
use crate::storage::FavoriteRecord;

/// Commands representing side effects to be executed by the runtime.
///
/// Produced by [`handle_event`](crate::app::handle_event). They represent
/// the boundary between pure state transformations and I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches the static breed catalog.
    ///
    /// Issued once at startup. Completion arrives as
    /// [`Event::BreedsLoaded`](crate::app::Event::BreedsLoaded) or
    /// [`Event::BreedsFailed`](crate::app::Event::BreedsFailed).
    FetchBreeds,

    /// Fetches one page of image results.
    ///
    /// The request snapshots the filters, page, and epoch it was issued for;
    /// completion arrives as a page event carrying the same epoch so stale
    /// responses can be discarded.
    FetchPage(SearchRequest),

    /// Writes the full favorites list to persistent storage.
    ///
    /// Emitted after every favorites mutation with a snapshot of the current
    /// list. A failed write is logged and the in-memory list stays
    /// authoritative.
    PersistFavorites(Vec<FavoriteRecord>),
}
