//! Tracing setup
//!
//! The terminal belongs to the dashboard, so log output only goes to a daily
//! rolling file under the config directory.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive checked before `RUST_LOG`
pub const LOG_ENV: &str = "FLEET_LOG";

const LOG_FILE_NAME: &str = "fleet-command.log";

/// Install the global subscriber
///
/// `FLEET_LOG` overrides the filter (e.g. `debug`, `fleet_command=trace`),
/// then `RUST_LOG`, finally `info`. Keep the returned guard alive for the
/// whole run or buffered lines are lost.
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = daily(log_dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        let filter = build_filter(Some("fleet_command=loud"));
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_explicit_directive_is_used() {
        let filter = build_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }
}
