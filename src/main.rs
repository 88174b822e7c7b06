use anyhow::{Context, Result};
use secret_codes::cli::{self, Commands};
use secret_codes::config::Config;
use secret_codes::{SettingsPanel, debug, session};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();
    debug::init_log_bridge(options.log_level);

    log::info!("Starting secret-codes {}", secret_codes::VERSION);

    let config = match &options.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug::apply_config_level(config.log_level.to_level_filter());

    let mut panel = SettingsPanel::new(&config).context("failed to set up settings panel")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match options.command {
        Some(Commands::List) => session::list_bindings(&panel, &mut stdout),
        Some(Commands::Feed { text }) => session::feed_text(
            &mut panel,
            &text,
            &mut stdin.lock().lines(),
            &mut stdout,
            options.assume_yes,
        ),
        None => session::run_interactive(&mut panel, stdin.lock(), &mut stdout, options.assume_yes),
    }
}
