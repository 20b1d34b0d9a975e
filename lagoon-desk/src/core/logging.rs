//! Tracing setup: stdout plus a daily rolling file under the work directory

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::error::{DeskError, DeskResult};

const LOG_FILE: &str = "lagoon-desk.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// `RUST_LOG`, then the configured filter, then the build default
fn build_filter(configured: Option<&str>) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return from_env;
    }
    if let Some(filter) = configured {
        match EnvFilter::try_new(filter) {
            Ok(f) => return f,
            Err(e) => eprintln!("warning: invalid log filter {filter:?}: {e}"),
        }
    }
    if cfg!(debug_assertions) {
        EnvFilter::new("info,lagoon_desk=debug,lagoon_client=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber. Keep the guard alive for the life of the
/// process or buffered file lines are lost.
pub fn init_logging(log_dir: &Path, configured: Option<&str>) -> DeskResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(configured))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| DeskError::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!(path = %log_dir.display(), "tracing initialized");
    Ok(guard)
}
