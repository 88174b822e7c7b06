//! Shared integration test helpers for secret-codes.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{default_panel, type_text};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use secret_codes::SettingsPanel;
use secret_codes::config::{CodeAction, Config, TriggerBinding};

/// A panel built from the default config.
pub fn default_panel() -> SettingsPanel {
    SettingsPanel::new(&Config::default()).expect("default config must build")
}

/// A panel with exactly the given bindings.
pub fn panel_with(bindings: &[(&str, CodeAction)]) -> SettingsPanel {
    let config = Config {
        trigger_phrases: bindings
            .iter()
            .map(|(phrase, action)| TriggerBinding::new(*phrase, *action))
            .collect(),
        ..Config::default()
    };
    SettingsPanel::new(&config).expect("test bindings must build")
}

/// Deliver `text` one character per key event, returning the phrases that fired.
pub fn type_text(panel: &mut SettingsPanel, text: &str) -> Vec<String> {
    text.chars()
        .filter_map(|ch| panel.key_press(&ch.to_string()).map(str::to_string))
        .collect()
}
