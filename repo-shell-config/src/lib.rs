//! Configuration system for the repo-shell repository browser.
//!
//! This crate provides configuration loading, saving, and default values
//! for the application shell. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - Default value functions used by serde
//! - Layout constants shared by the resize engine and the layout selector
//! - Typed configuration errors

pub mod config;
pub mod defaults;
pub mod error;
pub mod layout_constants;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
