//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user
//! commands and fetch completions, translating them into state changes and
//! action sequences. It is the pagination controller of the gallery: it owns
//! the `Idle → Loading → Idle/Error` fetch cycle, guarantees at most one
//! in-flight fetch, and discards stale responses after a filter change.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime (user commands or fetch completions)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! # Fetch keying
//!
//! Every reset fetch bumps the state's epoch; page completions carry the
//! epoch of the request they answer. A completion whose epoch differs from
//! the current one belongs to an abandoned filter session and is dropped,
//! which is what keeps a slow response from corrupting a list that has since
//! been replaced.

use crate::api::SearchRequest;
use crate::app::filters::{MimeType, SortOrder};
use crate::app::state::GalleryPhase;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user commands or completed fetches.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Initial mount: issues the one-shot breed-catalog fetch and the
    /// page-0 reset fetch with default filters.
    Started,

    /// Applies the current filter selections: page back to 0, items replaced
    /// by the incoming page. The only filter event that fetches.
    ApplyFilters,

    /// Restores the default filter selections without fetching.
    ResetFilters,

    /// Selects a breed id for the next apply; empty string clears the filter.
    SetBreed(String),

    /// Selects the result ordering for the next apply.
    SetOrder(SortOrder),

    /// Toggles an image type constraint for the next apply.
    ToggleMime(MimeType),

    /// End-of-visible-list signal: advance to the next page and append its
    /// results. Masked while a fetch is in flight.
    AdvancePage,

    /// Toggles the favorite status of the image with the given id.
    ToggleFavorite {
        /// Id of a gallery item or an existing favorite.
        id: String,
    },

    /// Opens the detail view for the image with the given id.
    SelectImage {
        /// Id of a gallery item or a favorite.
        id: String,
    },

    /// Closes the detail view.
    CloseDetail,

    /// Expands or collapses the favorites panel.
    ToggleFavoritesPanel,

    /// The breed catalog fetch completed successfully.
    BreedsLoaded {
        /// The full catalog.
        breeds: Vec<crate::domain::Breed>,
    },

    /// The breed catalog fetch failed.
    BreedsFailed {
        /// User-visible error message.
        message: String,
    },

    /// An image page fetch completed successfully.
    PageLoaded {
        /// Epoch of the request this answers.
        epoch: u64,
        /// Whether the results replace the current list.
        reset: bool,
        /// The fetched items, already enriched by the client.
        items: Vec<crate::domain::ImageItem>,
    },

    /// An image page fetch failed.
    PageFailed {
        /// Epoch of the request this answers.
        epoch: u64,
        /// Whether the failed fetch was a reset.
        reset: bool,
        /// User-visible error message.
        message: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns a `(should_render, actions)` pair: the boolean tells the runtime
/// whether visible state changed, and the actions are executed in order.
///
/// # Errors
///
/// Currently infallible; the `Result` return matches the rest of the event
/// pipeline so storage- or config-sensitive transitions can fail in place
/// later without changing every caller.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?discriminant_name(event)).entered();

    match event {
        Event::Started => {
            let request = begin_reset_fetch(state);
            tracing::debug!(epoch = state.epoch, "initial load");
            Ok((true, vec![Action::FetchBreeds, Action::FetchPage(request)]))
        }

        Event::ApplyFilters => {
            let request = begin_reset_fetch(state);
            tracing::debug!(epoch = state.epoch, filters = ?state.filters, "filters applied");
            Ok((true, vec![Action::FetchPage(request)]))
        }

        Event::ResetFilters => {
            state.filters.reset();
            tracing::debug!("filters reset to defaults");
            Ok((true, vec![]))
        }

        Event::SetBreed(id) => {
            state.filters.breed_id.clone_from(id);
            Ok((true, vec![]))
        }

        Event::SetOrder(order) => {
            state.filters.order = *order;
            Ok((true, vec![]))
        }

        Event::ToggleMime(mime) => {
            state.filters.toggle_mime(*mime);
            Ok((true, vec![]))
        }

        Event::AdvancePage => {
            if state.is_loading() {
                tracing::debug!("page advance masked while loading");
                return Ok((false, vec![]));
            }

            state.page += 1;
            state.phase = GalleryPhase::Loading;
            state.error = None;
            let request = page_request(state, false);
            tracing::debug!(page = state.page, epoch = state.epoch, "advancing page");
            Ok((true, vec![Action::FetchPage(request)]))
        }

        Event::ToggleFavorite { id } => {
            let Some(item) = state.find_item(id) else {
                tracing::debug!(id = %id, "toggle ignored, unknown image id");
                return Ok((false, vec![]));
            };

            state.toggle_favorite(&item);
            Ok((true, vec![Action::PersistFavorites(state.favorites.clone())]))
        }

        Event::SelectImage { id } => match state.find_item(id) {
            Some(item) => {
                state.selected = Some(item);
                Ok((true, vec![]))
            }
            None => {
                tracing::debug!(id = %id, "select ignored, unknown image id");
                Ok((false, vec![]))
            }
        },

        Event::CloseDetail => {
            let was_open = state.selected.take().is_some();
            Ok((was_open, vec![]))
        }

        Event::ToggleFavoritesPanel => {
            state.favorites_open = !state.favorites_open;
            Ok((true, vec![]))
        }

        Event::BreedsLoaded { breeds } => {
            tracing::debug!(breed_count = breeds.len(), "breed catalog loaded");
            state.breeds.clone_from(breeds);
            Ok((true, vec![]))
        }

        Event::BreedsFailed { message } => {
            tracing::warn!(error = %message, "breed catalog fetch failed");
            state.error = Some(message.clone());
            Ok((true, vec![]))
        }

        Event::PageLoaded { epoch, reset, items } => {
            if *epoch != state.epoch {
                tracing::debug!(
                    stale_epoch = epoch,
                    current_epoch = state.epoch,
                    "discarding stale page response"
                );
                return Ok((false, vec![]));
            }

            // `error` is cleared when a fetch is issued, not here: a breed
            // catalog failure must stay visible across a successful page load.
            state.phase = GalleryPhase::Idle;
            if *reset {
                state.items.clone_from(items);
            } else {
                state.items.extend(items.iter().cloned());
            }
            tracing::debug!(
                page = state.page,
                page_items = items.len(),
                total_items = state.items.len(),
                "page loaded"
            );
            Ok((true, vec![]))
        }

        Event::PageFailed { epoch, reset, message } => {
            if *epoch != state.epoch {
                tracing::debug!(stale_epoch = epoch, "discarding stale page failure");
                return Ok((false, vec![]));
            }

            state.phase = GalleryPhase::Error;
            state.error = Some(message.clone());
            // Keep `page` naming the last successfully loaded page so a later
            // advance retries the page that failed instead of skipping it.
            if !*reset {
                state.page = state.page.saturating_sub(1);
            }
            tracing::warn!(error = %message, page = state.page, "page fetch failed");
            Ok((true, vec![]))
        }
    }
}

/// Starts a fresh filter session: new epoch, page 0, loading phase, and a
/// reset search request built from the current filters.
fn begin_reset_fetch(state: &mut AppState) -> SearchRequest {
    state.epoch += 1;
    state.page = 0;
    state.phase = GalleryPhase::Loading;
    state.error = None;
    page_request(state, true)
}

/// Builds the search request for the state's current page and filters.
///
/// Snapshots the filters and resolves the breed hint from the catalog so the
/// client can enrich breed-less responses without reaching back into state.
fn page_request(state: &AppState, reset: bool) -> SearchRequest {
    let breed_hint = if state.filters.has_breed() {
        state.breed_by_id(&state.filters.breed_id).cloned()
    } else {
        None
    };

    SearchRequest {
        filters: state.filters.clone(),
        page: state.page,
        limit: state.page_size,
        epoch: state.epoch,
        reset,
        breed_hint,
        require_breeds: false,
    }
}

/// Returns a short static name for an event, for span labels.
const fn discriminant_name(event: &Event) -> &'static str {
    match event {
        Event::Started => "Started",
        Event::ApplyFilters => "ApplyFilters",
        Event::ResetFilters => "ResetFilters",
        Event::SetBreed(_) => "SetBreed",
        Event::SetOrder(_) => "SetOrder",
        Event::ToggleMime(_) => "ToggleMime",
        Event::AdvancePage => "AdvancePage",
        Event::ToggleFavorite { .. } => "ToggleFavorite",
        Event::SelectImage { .. } => "SelectImage",
        Event::CloseDetail => "CloseDetail",
        Event::ToggleFavoritesPanel => "ToggleFavoritesPanel",
        Event::BreedsLoaded { .. } => "BreedsLoaded",
        Event::BreedsFailed { .. } => "BreedsFailed",
        Event::PageLoaded { .. } => "PageLoaded",
        Event::PageFailed { .. } => "PageFailed",
    }
}
