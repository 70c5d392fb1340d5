//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr, filtered by `RUST_LOG` or the
//! flag/config-derived level. When a log directory is configured, a second
//! JSONL layer writes structured events through a non-blocking appender.

use anyhow::Context;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error` and each
/// `-v` steps the configured level up one notch.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(resolve_level(quiet, verbose, config_level)))
}

/// Resolve the effective level from flags and the configured base level.
fn resolve_level(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => match config_level {
            "error" => "warn",
            "warn" => "info",
            "info" => "debug",
            _ => "trace",
        },
        _ => "trace",
    }
}

/// Initialize the tracing subscriber.
///
/// Returns a guard that must be held for the process lifetime so the
/// non-blocking file writer flushes on exit.
pub fn init_observability(
    log_dir: Option<&Utf8Path>,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())
                .with_context(|| format!("failed to create log directory {dir}"))?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "docpulse.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer.boxed())
                .with(file_layer.boxed())
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer.boxed())
                .init();
            Ok(None)
        }
    }
}
