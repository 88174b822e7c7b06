// Library exports for testing and potential library use
//
// # Mutex Usage Policy
//
// Shared state between the panel and its registered actions uses
// `parking_lot::Mutex`: every access is synchronous and short, and the
// guards never cross a call into the recognizer.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod actions;
pub mod cli;
pub mod debug;
pub mod panel;
pub mod session;

pub use panel::{HostState, PanelEvent, SettingsPanel, Toggle};
pub use secret_codes_config as config;
