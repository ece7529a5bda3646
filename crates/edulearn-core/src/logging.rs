//! Logging setup using `tracing`, `tracing-subscriber` and `tracing-appender`.
//!
//! The TUI owns the terminal, so interactive sessions log to a daily rolling
//! file under `${EDULEARN_HOME}/logs`. Headless commands log to stderr.
//!
//! The filter comes from `EDULEARN_LOG` when set, otherwise from the
//! configured `log_level` applied to the EduLearn crates only.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "EDULEARN_LOG";

/// Prefix of the rolling log files.
const LOG_FILE_PREFIX: &str = "edulearn.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr (headless commands).
    Stderr,
    /// Daily rolling files inside the given directory (TUI sessions).
    RollingFile(PathBuf),
}

/// Keeps the background log writer alive. Drop it only at process exit.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(level: &str, target: &LogTarget) -> Result<LogGuard> {
    let filter = build_env_filter(level);

    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("install stderr log subscriber")?;
            Ok(LogGuard { _worker: None })
        }
        LogTarget::RollingFile(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, worker) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("install file log subscriber")?;
            Ok(LogGuard {
                _worker: Some(worker),
            })
        }
    }
}

/// Builds the filter, letting `EDULEARN_LOG` win over the configured level.
fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// External crates stay at warn to keep the log readable.
fn default_directives(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    let level = match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => level,
        _ => "info".to_string(),
    };
    format!("warn,edulearn={level},edulearn_core={level},edulearn_tui={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_our_crates() {
        let directives = default_directives("debug");
        assert_eq!(
            directives,
            "warn,edulearn=debug,edulearn_core=debug,edulearn_tui=debug"
        );
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        assert!(default_directives("loud").contains("edulearn_core=info"));
        assert!(default_directives(" TRACE ").contains("edulearn_tui=trace"));
    }
}
