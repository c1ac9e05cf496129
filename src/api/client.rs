//! HTTP client for The Cat API.
//!
//! This module wraps `reqwest` behind [`CatApiClient`], exposing the two
//! upstream endpoints the gallery uses: the one-shot breed catalog and the
//! paged image search. Failures are collapsed into
//! [`GalleryError::Network`](crate::domain::GalleryError) carrying one of the
//! fixed user-facing messages; the underlying transport or status detail is
//! logged, not propagated.
//!
//! # Request policy
//!
//! One attempt per request, no retries. A client-wide timeout bounds every
//! request so a hung upstream never leaves the gallery loading forever. When
//! an API key is configured it is sent as the `x-api-key` header; the public
//! endpoints work without one at reduced rate limits.

use crate::api::request::{attach_breed_fallback, SearchRequest};
use crate::domain::{Breed, GalleryError, ImageItem, Result, BREEDS_FETCH_ERROR, IMAGES_FETCH_ERROR};
use std::time::Duration;

/// Header used by The Cat API for authenticated requests.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the breed catalog and image search endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatApiClient {
    /// Creates a client for the given API base URL.
    ///
    /// `timeout` bounds every request end to end. A trailing slash on
    /// `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the underlying HTTP client cannot
    /// be constructed (e.g. TLS backend initialization failure).
    pub fn new(base_url: &str, timeout: Duration, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GalleryError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetches the static breed catalog.
    ///
    /// Executed once at startup. The catalog is immutable for the session;
    /// there is no scheduled retry on failure, breed filtering just stays
    /// unavailable until a later successful load is triggered manually.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Network`] with [`BREEDS_FETCH_ERROR`] on any
    /// transport failure or non-success status.
    pub async fn fetch_breeds(&self) -> Result<Vec<Breed>> {
        let url = format!("{}/breeds", self.base_url);
        tracing::debug!(url = %url, "fetching breed catalog");

        let response = self
            .request(&url)
            .send()
            .await
            .map_err(|e| network_error(BREEDS_FETCH_ERROR, &e))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "breed catalog request rejected");
            return Err(GalleryError::Network(BREEDS_FETCH_ERROR.to_string()));
        }

        let breeds: Vec<Breed> = response
            .json()
            .await
            .map_err(|e| network_error(BREEDS_FETCH_ERROR, &e))?;

        tracing::debug!(breed_count = breeds.len(), "breed catalog loaded");
        Ok(breeds)
    }

    /// Fetches one page of image results for the given request.
    ///
    /// Builds the search query from the request's filter snapshot, then
    /// applies the breed fallback enrichment to breed-less items when a
    /// breed filter was active (see [`attach_breed_fallback`]).
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Network`] with [`IMAGES_FETCH_ERROR`] on any
    /// transport failure or non-success status.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<ImageItem>> {
        let url = format!("{}/images/search", self.base_url);
        let pairs = request.query_pairs();

        let _span = tracing::debug_span!(
            "image_search",
            page = request.page,
            epoch = request.epoch,
            reset = request.reset,
        )
        .entered();
        tracing::debug!(url = %url, query = ?pairs, "fetching image page");

        let response = self
            .request(&url)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| network_error(IMAGES_FETCH_ERROR, &e))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "image search request rejected");
            return Err(GalleryError::Network(IMAGES_FETCH_ERROR.to_string()));
        }

        let mut items: Vec<ImageItem> = response
            .json()
            .await
            .map_err(|e| network_error(IMAGES_FETCH_ERROR, &e))?;

        attach_breed_fallback(&mut items, request);

        tracing::debug!(item_count = items.len(), "image page loaded");
        Ok(items)
    }

    /// Starts a GET request, attaching the API key header when configured.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self.http.get(url);
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }
}

/// Logs the underlying cause and returns the fixed user-facing message.
fn network_error(message: &str, cause: &reqwest::Error) -> GalleryError {
    tracing::debug!(error = %cause, "request failed");
    GalleryError::Network(message.to_string())
}
