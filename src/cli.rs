//! Command-line interface for secret-codes.
//!
//! This module handles CLI argument parsing and turns it into the runtime
//! options the binary acts on.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// secret-codes - type hidden phrases to trigger settings actions
#[derive(Parser)]
#[command(name = "secret-codes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of ~/.config/secret-codes/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Accept every confirmation prompt without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the configured trigger phrases and their actions
    List,

    /// Deliver TEXT as a single key event and print the resulting events
    Feed {
        /// Text to deliver
        text: String,
    },
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
    /// Answer yes to confirmation prompts
    pub assume_yes: bool,
    /// Subcommand to run; None means an interactive session
    pub command: Option<Commands>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            log_level: cli.log_level.map(|l| l.to_level_filter()),
            assume_yes: cli.yes,
            command: cli.command,
        }
    }
}

/// Parse process arguments
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
