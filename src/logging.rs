//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag
//! 2. `NETWORK_DIAGRAM_LOG` environment variable
//! 3. `log_level` in the settings file
//! 4. `info`

use tracing_subscriber::fmt;

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "NETWORK_DIAGRAM_LOG";

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>, saved: Option<LogLevel>) -> Result<(), InitError> {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, env.as_deref(), saved);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
}

pub fn resolve_level(
    cli_level: Option<LogLevel>,
    env: Option<&str>,
    saved: Option<LogLevel>,
) -> tracing::Level {
    cli_level
        .map(level_from_log_level)
        .or_else(|| env.and_then(parse_level_str))
        .or_else(|| saved.map(level_from_log_level))
        .unwrap_or(tracing::Level::INFO)
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
