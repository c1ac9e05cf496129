//! Search request construction and response enrichment.
//!
//! This module defines [`SearchRequest`], the value describing one page fetch
//! from the image search endpoint. A request snapshots the filters and page it
//! was issued for, along with the fetch epoch that lets the state machine
//! discard stale responses, so the request itself is the key referred to by
//! the concurrency rules in [`crate::app`].

use crate::app::filters::FilterState;
use crate::domain::{Breed, ImageItem};

/// Number of images requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// One page fetch from `GET {base}/images/search`.
///
/// Produced by the event handler as part of a fetch action and executed by
/// the API client. The embedded filter snapshot means later filter mutations
/// cannot affect a request already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Filter selections at the time the fetch was issued.
    pub filters: FilterState,

    /// Zero-indexed page to fetch.
    pub page: u32,

    /// Page size (`limit` parameter). Fixed at 9 in the default config.
    pub limit: u32,

    /// Fetch epoch this request belongs to. Responses whose epoch no longer
    /// matches the state machine's current epoch are discarded.
    pub epoch: u64,

    /// Whether results replace the current list (`true`) or are appended.
    pub reset: bool,

    /// Full record of the filtered breed, when a breed filter is active and
    /// the catalog has loaded. Used to enrich breed-less response items.
    pub breed_hint: Option<Breed>,

    /// Ask the API to return only images with embedded breed data
    /// (`has_breeds=1`). Off by default; the gallery shows breed-less cats
    /// with placeholder text instead.
    pub require_breeds: bool,
}

impl SearchRequest {
    /// Builds the query parameters for this request.
    ///
    /// Always includes `limit`, `page`, and `order`; `breed_ids` and
    /// `mime_types` only when the corresponding filter is set, and
    /// `has_breeds=1` only when [`Self::require_breeds`] is on.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
            ("order", self.filters.order.as_str().to_string()),
        ];

        if self.filters.has_breed() {
            pairs.push(("breed_ids", self.filters.breed_id.clone()));
        }

        if !self.filters.mime_types.is_empty() {
            let csv = self
                .filters
                .mime_types
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("mime_types", csv));
        }

        if self.require_breeds {
            pairs.push(("has_breeds", "1".to_string()));
        }

        pairs
    }
}

/// Attaches the hinted breed to items the API returned without breed data.
///
/// The upstream API sometimes omits embedded breed records even when the
/// search was filtered to a single breed. When that filter is active, every
/// breed-less item in the page is enriched with the filtered breed's full
/// record. This only augments ephemeral display data; favorite records are
/// built from whatever the item carried when it was toggled.
pub fn attach_breed_fallback(items: &mut [ImageItem], request: &SearchRequest) {
    let Some(breed) = request.breed_hint.as_ref() else {
        return;
    };

    if !request.filters.has_breed() || request.filters.breed_id != breed.id {
        return;
    }

    let mut enriched = 0_usize;
    for item in items.iter_mut() {
        if item.breeds.is_empty() {
            item.breeds.push(breed.clone());
            enriched += 1;
        }
    }

    if enriched > 0 {
        tracing::debug!(
            breed_id = %breed.id,
            enriched_count = enriched,
            "attached breed fallback to breed-less items"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::{MimeType, SortOrder};

    fn request_with(filters: FilterState) -> SearchRequest {
        SearchRequest {
            filters,
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
            epoch: 1,
            reset: true,
            breed_hint: None,
            require_breeds: false,
        }
    }

    fn abyssinian() -> Breed {
        Breed {
            id: "abys".to_string(),
            name: "Abyssinian".to_string(),
            ..Breed::default()
        }
    }

    #[test]
    fn default_query_has_limit_page_order_and_mime() {
        let request = request_with(FilterState::default());
        let pairs = request.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit", "9".to_string()),
                ("page", "0".to_string()),
                ("order", "RANDOM".to_string()),
                ("mime_types", "jpg".to_string()),
            ]
        );
    }

    #[test]
    fn breed_filter_adds_breed_ids() {
        let mut filters = FilterState::default();
        filters.breed_id = "abys".to_string();
        filters.order = SortOrder::Desc;
        let pairs = request_with(filters).query_pairs();
        assert!(pairs.contains(&("breed_ids", "abys".to_string())));
        assert!(pairs.contains(&("order", "DESC".to_string())));
    }

    #[test]
    fn empty_mime_selection_omits_parameter() {
        let mut filters = FilterState::default();
        filters.mime_types.clear();
        let pairs = request_with(filters).query_pairs();
        assert!(!pairs.iter().any(|(k, _)| *k == "mime_types"));
    }

    #[test]
    fn multiple_mime_types_join_as_csv() {
        let mut filters = FilterState::default();
        filters.toggle_mime(MimeType::Gif);
        let pairs = request_with(filters).query_pairs();
        assert!(pairs.contains(&("mime_types", "jpg,gif".to_string())));
    }

    #[test]
    fn require_breeds_adds_flag() {
        let mut request = request_with(FilterState::default());
        request.require_breeds = true;
        let pairs = request.query_pairs();
        assert!(pairs.contains(&("has_breeds", "1".to_string())));
    }

    #[test]
    fn fallback_enriches_breed_less_items() {
        let mut filters = FilterState::default();
        filters.breed_id = "abys".to_string();
        let mut request = request_with(filters);
        request.breed_hint = Some(abyssinian());

        let mut items = vec![
            ImageItem {
                id: "one".to_string(),
                url: "http://x/one.jpg".to_string(),
                breeds: vec![],
            },
            ImageItem {
                id: "two".to_string(),
                url: "http://x/two.jpg".to_string(),
                breeds: vec![],
            },
        ];

        attach_breed_fallback(&mut items, &request);

        for item in &items {
            assert_eq!(item.breed().map(|b| b.id.as_str()), Some("abys"));
        }
    }

    #[test]
    fn fallback_leaves_embedded_breeds_alone() {
        let mut filters = FilterState::default();
        filters.breed_id = "abys".to_string();
        let mut request = request_with(filters);
        request.breed_hint = Some(abyssinian());

        let embedded = Breed {
            id: "beng".to_string(),
            name: "Bengal".to_string(),
            ..Breed::default()
        };
        let mut items = vec![ImageItem {
            id: "one".to_string(),
            url: "http://x/one.jpg".to_string(),
            breeds: vec![embedded.clone()],
        }];

        attach_breed_fallback(&mut items, &request);
        assert_eq!(items[0].breeds, vec![embedded]);
    }

    #[test]
    fn fallback_is_inert_without_breed_filter() {
        let mut request = request_with(FilterState::default());
        request.breed_hint = Some(abyssinian());

        let mut items = vec![ImageItem {
            id: "one".to_string(),
            url: "http://x/one.jpg".to_string(),
            breeds: vec![],
        }];

        attach_breed_fallback(&mut items, &request);
        assert!(items[0].breeds.is_empty());
    }
}
