//! Trigger-phrase recognition for secret-codes.
//!
//! This crate turns a stream of typed text into action invocations: a fixed
//! set of phrases is registered once, and every time the most recently typed
//! characters complete one of them, its action fires.
//!
//! Features:
//! - Case-insensitive matching (input and phrases share one normalization)
//! - Incremental scanning with bounded pending state
//! - Fragment-agnostic input (one key at a time or whole strings)

mod recognizer;
pub mod registry;

pub use recognizer::TriggerRecognizer;
pub use registry::{Action, ActionRegistry, RegistryBuilder, RegistryError};

/// Normalize text to the canonical case used for matching.
///
/// Each character is lowercased on its own, so normalizing a concatenation
/// gives the same result as concatenating normalized fragments.
pub fn normalize(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
