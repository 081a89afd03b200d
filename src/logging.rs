use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a directory for rotating log files
pub const LOG_DIR_ENV: &str = "MKDOCS_CONVERT_LOG_DIR";

/// Environment variable switching the default level to debug when set to `1` or `true`
pub const DEBUG_ENV: &str = "MKDOCS_CONVERT_DEBUG";

/// Build the level filter. `RUST_LOG` wins over the built-in default.
fn env_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug_mode {
            EnvFilter::new("mkdocs_convert=debug")
        } else {
            EnvFilter::new("mkdocs_convert=info")
        }
    })
}

/// Setup logging to stderr, plus a daily rotating log file when `log_dir` is given.
///
/// # Arguments
/// * `log_dir` - Directory for log files, or `None` for console only
/// * `log_prefix` - Prefix for log files (e.g., "mkdocs-convert")
/// * `debug_mode` - If true, use debug level; otherwise use info level
///
/// # Returns
/// A guard that must be held for the duration of the program to keep file
/// logging active (`None` when logging to the console only)
pub fn setup_logging(
    log_dir: Option<&str>,
    log_prefix: &str,
    debug_mode: bool,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            // Create log directory if it doesn't exist
            let log_path = Utf8PathBuf::from(log_dir);
            if !log_path.exists() {
                fs::create_dir_all(&log_path)
                    .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
            }

            let file_appender = rolling::daily(log_dir, log_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(debug_mode))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: dir={:?}, prefix={}, debug={}",
        log_dir,
        log_prefix,
        debug_mode
    );

    Ok(guard)
}

/// Read the logging settings from the environment.
///
/// # Returns
/// `(log_dir, debug_mode)`
pub fn settings_from_env() -> (Option<String>, bool) {
    let log_dir = std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty());
    let debug_mode = std::env::var(DEBUG_ENV)
        .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false);
    (log_dir, debug_mode)
}
