//! Configuration system for secret-codes.
//!
//! This crate provides configuration loading, saving, and default values
//! for the settings-panel trigger phrases. It includes:
//!
//! - The phrase → built-in action bindings and their defaults
//! - Log level selection
//! - YAML persistence under the platform config directory

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{CodeAction, LogLevel, TriggerBinding};
