//! Infrastructure layer for platform-specific utilities.
//!
//! # Modules
//!
//! - [`paths`]: Default locations for storage and configuration files

pub mod paths;

pub use paths::{default_config_file, default_data_dir};
