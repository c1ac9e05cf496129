//! Application layer coordinating state, events, and actions.
//!
//! This module defines the gallery's core logic layer, sitting between the
//! runtime (`main.rs`) and the domain/api/storage layers. It implements the
//! event-driven state machine that powers pagination, filtering, and
//! favorites.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Commands / fetch completions → Events → Event Handler → State Mutations
//!                                             ↓
//!                         Actions (fetches, persistence) → Runtime
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filters`]: Breed/order/mime filter selections and defaults
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container

pub mod actions;
pub mod filters;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use filters::{FilterState, MimeType, SortOrder};
pub use handler::{handle_event, Event};
pub use state::{AppState, FavoriteTransition, GalleryPhase};
