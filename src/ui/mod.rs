//! Terminal presentation layer.
//!
//! Pure view-model computation plus a plain-text renderer. Nothing in here
//! mutates state or performs I/O beyond writing to stdout; the core state
//! machine is fully usable without this module.
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable snapshots computed from [`crate::app::AppState`]
//! - [`renderer`]: Stdout formatting

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{CardView, DetailView, GalleryView};
