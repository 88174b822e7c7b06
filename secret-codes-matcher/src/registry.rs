//! Phrase-to-action registry.
//!
//! The registry is built once through [`RegistryBuilder`] and never changes
//! afterwards. Phrases are stored normalized in an ordered map, which lets
//! prefix questions be answered with a range lookup.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use thiserror::Error;

use crate::normalize;

/// A niladic callback fired when its phrase is typed.
pub type Action = Box<dyn Fn() + Send + Sync>;

/// Errors raised while building an [`ActionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No phrases were registered.
    #[error("trigger registry is empty: at least one phrase is required")]
    Empty,

    /// A phrase was empty (before or after normalization).
    #[error("trigger phrases must not be empty")]
    EmptyPhrase,

    /// Two phrases normalize to the same text.
    #[error("duplicate trigger phrase '{phrase}'")]
    DuplicatePhrase {
        /// The normalized phrase that was registered twice
        phrase: String,
    },
}

/// Immutable mapping from normalized trigger phrase to action.
pub struct ActionRegistry {
    actions: BTreeMap<String, Action>,
    longest: usize,
}

impl ActionRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Number of registered phrases.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always false for a built registry; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Check whether `phrase` (normalized first) is registered.
    pub fn contains(&self, phrase: &str) -> bool {
        self.actions.contains_key(normalize(phrase).as_str())
    }

    /// Registered phrases in sorted order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Length in characters of the longest phrase.
    ///
    /// Pending input held by a recognizer never exceeds this.
    pub fn longest_phrase_len(&self) -> usize {
        self.longest
    }

    /// Look up the phrase and action registered for exactly `piece`.
    pub(crate) fn exact(&self, piece: &str) -> Option<(&str, &Action)> {
        self.actions
            .get_key_value(piece)
            .map(|(phrase, action)| (phrase.as_str(), action))
    }

    /// Check whether some phrase strictly longer than `piece` starts with it.
    ///
    /// Keys sharing a prefix are contiguous in sorted order, and every key
    /// that extends `piece` sorts after it, so only the first key past
    /// `piece` needs checking.
    pub(crate) fn extends_beyond(&self, piece: &str) -> bool {
        self.actions
            .range::<str, _>((Bound::Excluded(piece), Bound::Unbounded))
            .next()
            .is_some_and(|(phrase, _)| phrase.starts_with(piece))
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("phrases", &self.actions.keys().collect::<Vec<_>>())
            .field("longest", &self.longest)
            .finish()
    }
}

/// Collects phrase/action pairs and validates them into an [`ActionRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(String, Action)>,
}

impl RegistryBuilder {
    /// Register `action` to fire when `phrase` is typed.
    pub fn register<F>(mut self, phrase: impl Into<String>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.entries.push((phrase.into(), Box::new(action)));
        self
    }

    /// Register an already boxed action.
    pub fn register_boxed(mut self, phrase: impl Into<String>, action: Action) -> Self {
        self.entries.push((phrase.into(), action));
        self
    }

    /// Validate the collected entries and freeze them.
    pub fn build(self) -> Result<ActionRegistry, RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut actions = BTreeMap::new();
        let mut longest = 0;
        for (phrase, action) in self.entries {
            let normalized = normalize(&phrase);
            if normalized.is_empty() {
                return Err(RegistryError::EmptyPhrase);
            }
            if actions.contains_key(&normalized) {
                return Err(RegistryError::DuplicatePhrase { phrase: normalized });
            }
            longest = longest.max(normalized.chars().count());
            log::debug!("Registered trigger phrase '{}'", normalized);
            actions.insert(normalized, action);
        }

        log::info!("Trigger registry built with {} phrases", actions.len());
        Ok(ActionRegistry { actions, longest })
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field(
                "phrases",
                &self.entries.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            )
            .finish()
    }
}
