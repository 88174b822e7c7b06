// Configuration types for trigger phrases and logging.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in action a trigger phrase can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeAction {
    /// Offer to toggle DEBUG logging
    DebugMode,
    /// Offer to toggle the test environment
    TestMode,
    /// Ask the host to pick a custom language pack
    LoadLang,
    /// Toggle file download logging (debug mode only)
    DebugFiles,
    /// Crash deliberately
    CrashPlease,
    /// Offer to toggle work mode
    WorkMode,
    /// Offer to toggle moderate mode
    Moderate,
    /// Ask the host to resynchronize updates
    GetDifference,
    /// Ask the host to open a palette file
    LoadColors,
    /// Ask the host to start the theme editor
    EditTheme,
    /// Offer to switch between internal and external video player
    VideoPlayer,
}

impl CodeAction {
    /// Identifier used in the config file
    pub fn name(self) -> &'static str {
        match self {
            CodeAction::DebugMode => "debug_mode",
            CodeAction::TestMode => "test_mode",
            CodeAction::LoadLang => "load_lang",
            CodeAction::DebugFiles => "debug_files",
            CodeAction::CrashPlease => "crash_please",
            CodeAction::WorkMode => "work_mode",
            CodeAction::Moderate => "moderate",
            CodeAction::GetDifference => "get_difference",
            CodeAction::LoadColors => "load_colors",
            CodeAction::EditTheme => "edit_theme",
            CodeAction::VideoPlayer => "video_player",
        }
    }

    /// All built-in actions
    pub fn all() -> &'static [CodeAction] {
        &[
            CodeAction::DebugMode,
            CodeAction::TestMode,
            CodeAction::LoadLang,
            CodeAction::DebugFiles,
            CodeAction::CrashPlease,
            CodeAction::WorkMode,
            CodeAction::Moderate,
            CodeAction::GetDifference,
            CodeAction::LoadColors,
            CodeAction::EditTheme,
            CodeAction::VideoPlayer,
        ]
    }
}

impl fmt::Display for CodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trigger phrase configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerBinding {
    /// Text to type, e.g., "debugmode" (matched case-insensitively)
    pub phrase: String,
    /// Action to run, e.g., "debug_mode"
    pub action: CodeAction,
}

impl TriggerBinding {
    pub fn new(phrase: impl Into<String>, action: CodeAction) -> Self {
        Self {
            phrase: phrase.into(),
            action,
        }
    }
}

/// Log level for the log bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
