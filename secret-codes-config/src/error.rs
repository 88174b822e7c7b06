//! Typed error variants for the secret-codes-config crate.
//!
//! Provides structured error types for config I/O and validation operations.
//! Public functions return `anyhow::Result`; callers that need to tell the
//! failure modes apart can downcast to [`ConfigError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use secret_codes_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!             ConfigError::PathTraversal(msg) => eprintln!("Path traversal: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// A path resolved outside the expected configuration directory.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}
