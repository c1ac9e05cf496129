//! Application state management.
//!
//! This module defines [`AppState`], the single state-machine object owning
//! every piece of related gallery state: the breed catalog, the loaded items,
//! pagination bookkeeping, the loading phase, the current error string, the
//! filter selections, and the favorites list. Keeping these in one place with
//! explicit transitions (see [`crate::app::handler`]) eliminates the
//! interleaving bugs that independent state cells invite.
//!
//! # Derived data
//!
//! Lookup structures (favorite-id set, breed-by-id) are recomputed on demand
//! from the canonical sequences rather than cached, so they can never go
//! stale against the lists they derive from.

use crate::app::filters::FilterState;
use crate::domain::{Breed, ImageItem};
use crate::storage::FavoriteRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;

/// Loading phase of the gallery fetch state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryPhase {
    /// No fetch in flight; page-advance signals are accepted.
    #[default]
    Idle,

    /// A fetch is in flight; further fetch-triggering events are masked.
    Loading,

    /// The last fetch failed; the error string is set and the user must
    /// re-trigger (apply filters or advance) to retry.
    Error,
}

/// Direction of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTransition {
    /// The item was not a favorite and has been prepended.
    Added,

    /// The item was a favorite and has been removed.
    Removed,
}

/// Central application state container.
///
/// Mutated only by the event handler; all side effects are expressed as
/// actions for the runtime to execute. View models are computed on demand
/// from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Breed catalog, fetched once at startup. Empty until the catalog load
    /// succeeds; breed filtering is simply unavailable while empty.
    pub breeds: Vec<Breed>,

    /// Loaded gallery items. Replaced wholesale by a reset fetch, extended
    /// by append fetches within a filter session.
    pub items: Vec<ImageItem>,

    /// Favorites list, newest first. Loaded from storage at startup and
    /// persisted after every mutation.
    pub favorites: Vec<FavoriteRecord>,

    /// Current filter selections. Mutations do not fetch; only applying
    /// filters triggers the reset-and-refetch.
    pub filters: FilterState,

    /// Zero-indexed page the gallery is currently positioned on. Reset to 0
    /// when filters are applied; rolled back when an append fetch fails so
    /// it always names the last successfully loaded page.
    pub page: u32,

    /// Current fetch phase.
    pub phase: GalleryPhase,

    /// User-visible error message from the most recent failure, if any.
    /// Replaced by newer failures, cleared when a fetch is issued.
    pub error: Option<String>,

    /// Monotonic counter keying in-flight fetches to the filter session they
    /// were issued for. Bumped on every reset fetch; completion events with
    /// a stale epoch are discarded.
    pub epoch: u64,

    /// Item shown in the detail view, if open. Holds its own copy so it
    /// survives a gallery reset underneath it.
    pub selected: Option<ImageItem>,

    /// Whether the favorites panel is expanded.
    pub favorites_open: bool,

    /// Page size for search requests. Fixed at 9 by default; configurable
    /// through [`Config`](crate::Config) for tests and alternate deployments.
    pub page_size: u32,
}

impl AppState {
    /// Creates the initial state from favorites restored out of storage.
    ///
    /// Everything else starts empty with default filters; the startup event
    /// issues the breed-catalog and first-page fetches.
    #[must_use]
    pub fn new(favorites: Vec<FavoriteRecord>) -> Self {
        Self {
            breeds: Vec::new(),
            items: Vec::new(),
            favorites,
            filters: FilterState::default(),
            page: 0,
            phase: GalleryPhase::Idle,
            error: None,
            epoch: 0,
            selected: None,
            favorites_open: false,
            page_size: crate::api::DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns whether a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == GalleryPhase::Loading
    }

    /// Computes the set of favorited image ids from the canonical list.
    #[must_use]
    pub fn favorite_ids(&self) -> HashSet<&str> {
        self.favorites.iter().map(|f| f.id.as_str()).collect()
    }

    /// Looks up a breed by its exact id in the loaded catalog.
    #[must_use]
    pub fn breed_by_id(&self, id: &str) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.id == id)
    }

    /// Resolves a breed by fuzzy-matching the query against breed names.
    ///
    /// Returns the best-scoring match, preferring an exact id match when one
    /// exists so `breed abys` keeps working alongside `breed abyssinian`.
    /// Returns `None` when the catalog is empty or nothing matches.
    #[must_use]
    pub fn resolve_breed(&self, query: &str) -> Option<&Breed> {
        if let Some(breed) = self.breed_by_id(query) {
            return Some(breed);
        }

        let matcher = SkimMatcherV2::default();
        self.breeds
            .iter()
            .filter_map(|breed| {
                matcher
                    .fuzzy_match(&breed.name.to_lowercase(), &query.to_lowercase())
                    .map(|score| (score, breed))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, breed)| breed)
    }

    /// Finds a displayable item by id in the gallery or, failing that, the
    /// favorites list.
    ///
    /// Favorites are reconstructed into items so the detail view can open
    /// from the favorites panel even after the gallery was reset.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<ImageItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .or_else(|| {
                self.favorites
                    .iter()
                    .find(|f| f.id == id)
                    .map(FavoriteRecord::to_item)
            })
    }

    /// Toggles an item's membership in the favorites list.
    ///
    /// If a record with the item's id exists it is removed, preserving the
    /// order of the remaining entries. Otherwise a new record built from the
    /// item is prepended, keeping the list newest-first. Two toggles on the
    /// same id restore the original membership.
    pub fn toggle_favorite(&mut self, item: &ImageItem) -> FavoriteTransition {
        if let Some(pos) = self.favorites.iter().position(|f| f.id == item.id) {
            self.favorites.remove(pos);
            tracing::debug!(id = %item.id, "favorite removed");
            FavoriteTransition::Removed
        } else {
            self.favorites.insert(0, FavoriteRecord::from_item(item));
            tracing::debug!(id = %item.id, "favorite added");
            FavoriteTransition::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ImageItem {
        ImageItem {
            id: id.to_string(),
            url: format!("http://x/{id}.jpg"),
            breeds: vec![],
        }
    }

    fn breed(id: &str, name: &str) -> Breed {
        Breed {
            id: id.to_string(),
            name: name.to_string(),
            ..Breed::default()
        }
    }

    #[test]
    fn toggle_parity_restores_membership() {
        let mut state = AppState::new(vec![]);
        let cat = item("abc");

        assert!(state.favorite_ids().is_empty());
        assert_eq!(state.toggle_favorite(&cat), FavoriteTransition::Added);
        assert!(state.favorite_ids().contains("abc"));
        assert_eq!(state.toggle_favorite(&cat), FavoriteTransition::Removed);
        assert!(state.favorite_ids().is_empty());

        // An odd number of toggles flips membership.
        for _ in 0..3 {
            state.toggle_favorite(&cat);
        }
        assert!(state.favorite_ids().contains("abc"));
    }

    #[test]
    fn new_favorites_go_to_the_head() {
        let mut state = AppState::new(vec![]);
        state.toggle_favorite(&item("first"));
        state.toggle_favorite(&item("second"));

        let ids: Vec<&str> = state.favorites.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn removal_preserves_order_of_remaining_entries() {
        let mut state = AppState::new(vec![]);
        for id in ["a", "b", "c"] {
            state.toggle_favorite(&item(id));
        }

        state.toggle_favorite(&item("b"));
        let ids: Vec<&str> = state.favorites.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn resolve_breed_prefers_exact_id() {
        let mut state = AppState::new(vec![]);
        state.breeds = vec![breed("abys", "Abyssinian"), breed("beng", "Bengal")];

        assert_eq!(state.resolve_breed("abys").map(|b| b.id.as_str()), Some("abys"));
    }

    #[test]
    fn resolve_breed_fuzzy_matches_names() {
        let mut state = AppState::new(vec![]);
        state.breeds = vec![breed("abys", "Abyssinian"), breed("beng", "Bengal")];

        assert_eq!(
            state.resolve_breed("bengal").map(|b| b.id.as_str()),
            Some("beng")
        );
        assert!(state.resolve_breed("zzzzqq").is_none());
    }

    #[test]
    fn find_item_falls_back_to_favorites() {
        let mut state = AppState::new(vec![]);
        state.toggle_favorite(&item("fav"));
        state.items = vec![item("live")];

        assert_eq!(state.find_item("live").map(|i| i.id), Some("live".to_string()));
        assert_eq!(state.find_item("fav").map(|i| i.id), Some("fav".to_string()));
        assert!(state.find_item("nope").is_none());
    }
}
