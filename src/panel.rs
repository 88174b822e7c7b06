//! Settings panel host for typed secret codes.
//!
//! The panel owns the trigger recognizer for one settings window, the host
//! state the built-in actions flip, and the queue of events those actions
//! raise for the UI (confirmation prompts, notices, file pickers).

use crate::actions;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use secret_codes_config::{CodeAction, Config, TriggerBinding};
use secret_codes_matcher::{ActionRegistry, TriggerRecognizer};
use std::sync::Arc;

/// Flags the built-in actions can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostState {
    /// DEBUG logging (network events are logged)
    pub debug_mode: bool,
    /// Connected to the test environment
    pub test_mode: bool,
    /// Work mode (chat folders enabled)
    pub work_mode: bool,
    /// Moderate mode
    pub moderate_mode: bool,
    /// Videos open in an external player
    pub external_video_player: bool,
    /// File download logging, only switchable in debug mode
    pub file_loader_logging: bool,
}

/// A host setting that is flipped after the user confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    DebugMode,
    TestMode,
    WorkMode,
    ModerateMode,
    ExternalVideoPlayer,
}

impl Toggle {
    /// Whether the flag is part of the persisted user settings.
    pub fn persists(self) -> bool {
        matches!(self, Toggle::ModerateMode | Toggle::ExternalVideoPlayer)
    }

    /// Flip the flag in `state`, returning its new value.
    pub fn apply(self, state: &mut HostState) -> bool {
        let flag = match self {
            Toggle::DebugMode => &mut state.debug_mode,
            Toggle::TestMode => &mut state.test_mode,
            Toggle::WorkMode => &mut state.work_mode,
            Toggle::ModerateMode => &mut state.moderate_mode,
            Toggle::ExternalVideoPlayer => &mut state.external_video_player,
        };
        *flag = !*flag;
        *flag
    }
}

/// Something the UI must act on after a secret code fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Ask the user to confirm before applying `toggle`
    Confirm { message: String, toggle: Toggle },
    /// Show an informational notice
    Inform(String),
    /// Let the user pick a custom language pack
    ChooseCustomLanguage,
    /// Let the user pick a palette file to apply
    OpenPaletteFile { title: String, filter: String },
    /// Open the theme editor
    StartThemeEditor,
    /// Resynchronize updates with the server
    RequestDifference,
    /// Persisted user settings changed and should be written out
    UserSettingsChanged,
}

/// State shared between the panel and the actions it registered.
#[derive(Debug, Clone, Default)]
pub(crate) struct PanelContext {
    pub(crate) state: Arc<Mutex<HostState>>,
    pub(crate) events: Arc<Mutex<Vec<PanelEvent>>>,
}

impl PanelContext {
    pub(crate) fn push(&self, event: PanelEvent) {
        log::debug!("Panel event queued: {:?}", event);
        self.events.lock().push(event);
    }
}

/// The settings panel: routes key text to the recognizer and collects events.
#[derive(Debug)]
pub struct SettingsPanel {
    context: PanelContext,
    bindings: Vec<TriggerBinding>,
    /// None when secret codes are disabled in the config
    recognizer: Option<TriggerRecognizer>,
}

impl SettingsPanel {
    /// Create a panel with default host state.
    ///
    /// Fails if the configured phrases cannot form a valid registry.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_state(config, HostState::default())
    }

    /// Create a panel starting from the given host state.
    pub fn with_state(config: &Config, state: HostState) -> Result<Self> {
        let context = PanelContext {
            state: Arc::new(Mutex::new(state)),
            events: Arc::default(),
        };

        let recognizer = if config.enabled {
            let registry = config
                .trigger_phrases
                .iter()
                .fold(ActionRegistry::builder(), |builder, binding| {
                    builder.register_boxed(
                        binding.phrase.clone(),
                        actions::build_action(binding.action, &context),
                    )
                })
                .build()
                .context("invalid trigger phrase configuration")?;
            Some(TriggerRecognizer::new(Arc::new(registry)))
        } else {
            log::info!("Secret codes disabled by config");
            None
        };

        Ok(Self {
            context,
            bindings: config.trigger_phrases.clone(),
            recognizer,
        })
    }

    /// Whether typed text is being matched.
    pub fn is_enabled(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Configured phrases with their actions, in config order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, CodeAction)> {
        self.bindings.iter().map(|b| (b.phrase.as_str(), b.action))
    }

    /// Deliver the text produced by one key event.
    ///
    /// Returns the phrase whose action fired, if any.
    pub fn key_press(&mut self, text: &str) -> Option<&str> {
        self.recognizer.as_mut()?.feed(text)
    }

    /// Take all events raised since the last call.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        std::mem::take(&mut *self.context.events.lock())
    }

    /// Apply a toggle the user confirmed.
    pub fn confirm(&self, toggle: Toggle) -> bool {
        let value = toggle.apply(&mut self.context.state.lock());
        log::info!("{:?} is now {}", toggle, if value { "on" } else { "off" });
        if toggle.persists() {
            self.context.push(PanelEvent::UserSettingsChanged);
        }
        value
    }

    /// Snapshot of the current host state.
    pub fn state(&self) -> HostState {
        *self.context.state.lock()
    }
}
