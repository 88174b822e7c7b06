//! Config struct, persistence, and path resolution.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Merging newly added default trigger phrases into an existing file

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{LogLevel, TriggerBinding};
use anyhow::{Context, Result};
use secret_codes_matcher::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings-panel trigger phrase configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether typed trigger phrases are recognized at all
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Log level used when neither the CLI nor RUST_LOG set one
    pub log_level: LogLevel,

    /// Phrase → action bindings
    #[serde(default = "defaults::trigger_phrases")]
    pub trigger_phrases: Vec<TriggerBinding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled(),
            log_level: LogLevel::default(),
            trigger_phrases: defaults::trigger_phrases(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            // Refuse config files that resolve (e.g. through a symlink) outside
            // the config directory.
            let config_dir = Self::config_dir();
            if let Err(e) = Self::resolve_config_file(&config_path, &config_dir) {
                log::error!("Refusing config file: {e}");
                return Err(e.into());
            }
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config = Self::from_yaml(&contents)
            .with_context(|| format!("failed to load {}", path.display()))?;
        config.merge_default_bindings();
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .trigger_phrases
            .iter()
            .position(|binding| binding.phrase.is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "trigger_phrases[{index}]: phrase must not be empty"
            )));
        }
        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Add default bindings for actions the user has not bound.
    ///
    /// A default is skipped when, after normalization, it equals or shares a
    /// prefix with a phrase already configured. Adding `debugmode` next to a
    /// user's `debug` would hold `debug` back forever, and an equal phrase
    /// would be rejected by the registry.
    pub fn merge_default_bindings(&mut self) {
        let existing_actions: HashSet<_> =
            self.trigger_phrases.iter().map(|b| b.action).collect();

        let mut added_count = 0;
        for default_binding in defaults::trigger_phrases() {
            if existing_actions.contains(&default_binding.action) {
                continue;
            }
            if let Some(conflict) = self.overlapping_binding(&default_binding.phrase) {
                log::warn!(
                    "Default trigger phrase '{}' overlaps '{}' ({}); not adding {}",
                    default_binding.phrase,
                    conflict.phrase,
                    conflict.action,
                    default_binding.action
                );
                continue;
            }
            log::info!(
                "Adding new default trigger phrase: {} -> {}",
                default_binding.phrase,
                default_binding.action
            );
            self.trigger_phrases.push(default_binding);
            added_count += 1;
        }

        if added_count > 0 {
            log::info!(
                "Merged {} new default trigger phrase(s) into user config",
                added_count
            );
        }
    }

    /// First binding whose phrase is a prefix of `phrase` or extends it.
    fn overlapping_binding(&self, phrase: &str) -> Option<&TriggerBinding> {
        let phrase = normalize(phrase);
        self.trigger_phrases.iter().find(|binding| {
            let existing = normalize(&binding.phrase);
            existing.starts_with(&phrase) || phrase.starts_with(&existing)
        })
    }

    /// Resolve `path` through any symlinks and require it to sit under `config_dir`.
    pub fn resolve_config_file(path: &Path, config_dir: &Path) -> Result<PathBuf, ConfigError> {
        let resolved = fs::canonicalize(path)?;
        // A config dir that cannot be resolved is compared as given
        let config_dir = fs::canonicalize(config_dir).unwrap_or_else(|_| config_dir.to_path_buf());

        if resolved.starts_with(&config_dir) {
            Ok(resolved)
        } else {
            Err(ConfigError::PathTraversal(format!(
                "{} points to {}, not inside {}",
                path.display(),
                resolved.display(),
                config_dir.display()
            )))
        }
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("secret-codes")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/secret-codes on every Unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("secret-codes")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
