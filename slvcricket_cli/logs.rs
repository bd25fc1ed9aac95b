use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
};

/// Sets up logging for the `slvcricket` binary.
///
/// Two layers are installed:
/// 1. A daily rotating file in `log_dir`, filtered by `RUST_LOG`
///    (default `info,slvcricket=debug`).
/// 2. A stderr layer for warnings and errors, see [`console_filter`].
///
/// The returned guard flushes the file writer when dropped and must be
/// kept alive until the process exits.
pub fn setup_logging(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir, "slvcricket.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = "info,slvcricket=debug";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

/// Warnings and errors only. Store events are left out: the scorer already
/// sees them as notifications.
fn console_filter() -> Targets {
    Targets::new()
        .with_default(Level::WARN)
        .with_target("slvcricket_app", LevelFilter::OFF)
}
