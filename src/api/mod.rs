//! Upstream API layer for The Cat API.
//!
//! This module owns everything that touches the network: request value types
//! with their query construction, the `reqwest`-backed client, and the breed
//! fallback enrichment applied to search responses. The state machine in
//! [`crate::app`] never performs I/O itself; it emits fetch actions carrying
//! a [`SearchRequest`], and the runtime executes them through
//! [`CatApiClient`].
//!
//! # Modules
//!
//! - `request`: Search request snapshot, query building, breed enrichment
//! - `client`: HTTP client for the breed catalog and image search endpoints

pub mod client;
pub mod request;

pub use client::CatApiClient;
pub use request::{attach_breed_fallback, SearchRequest, DEFAULT_PAGE_SIZE};
