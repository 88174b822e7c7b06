/// Log bridge for secret-codes
///
/// Routes every `log::info!()` etc. from this crate and its sub-crates to
/// stderr as `[timestamp] [LEVEL] [target] message` lines.
///
/// Level precedence:
/// 1. `--log-level` on the command line
/// 2. `RUST_LOG` (a bare level such as `debug`; module filters are ignored)
/// 3. `log_level` in config.yaml, applied after the config is loaded
///
/// Turning on debug mode from the settings panel raises the level to at
/// least Debug until it is turned off again.
use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

/// Set when the CLI or RUST_LOG chose the level, so config cannot override it
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

/// Level to return to when debug mode is switched off
static BASE_LEVEL: Mutex<log::LevelFilter> = Mutex::new(log::LevelFilter::Off);

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            record.args(),
        );
        // Losing a log line is preferable to failing the caller
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(
    timestamp: &str,
    level: log::Level,
    target: &str,
    args: &std::fmt::Arguments,
) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, args)
}

fn level_from_env() -> Option<log::LevelFilter> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|val| val.trim().parse::<log::LevelFilter>().ok())
}

/// Install the log bridge.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let level = cli_level.or_else(level_from_env);
    LEVEL_PINNED.store(level.is_some(), Ordering::Relaxed);
    let level = level.unwrap_or(log::LevelFilter::Off);
    *BASE_LEVEL.lock() = level;

    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(level);
    }
}

/// Apply the level from config.yaml unless the CLI or RUST_LOG set one.
pub fn apply_config_level(level: log::LevelFilter) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    *BASE_LEVEL.lock() = level;
    log::set_max_level(level);
}

/// Follow the panel's debug mode flag.
pub fn apply_debug_mode(enabled: bool) {
    let base = *BASE_LEVEL.lock();
    let level = if enabled {
        base.max(log::LevelFilter::Debug)
    } else {
        base
    };
    log::set_max_level(level);
}
