//! Tracing-based observability.
//!
//! The crate is instrumented with `tracing` spans and events throughout; this
//! module wires the subscriber. Output goes to stderr in the fmt layer's
//! compact format, filtered by `RUST_LOG` or the configured trace level.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
