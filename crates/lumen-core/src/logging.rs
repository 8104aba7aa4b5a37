//! Logging setup
//!
//! Everything goes to a daily-rolling file under the platform data dir; the
//! terminal itself belongs to the TUI. Level filtering is controlled by the
//! `LUMEN_LOG` environment variable (`LUMEN_LOG=debug lumen`).

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_ENV_VAR: &str = "LUMEN_LOG";
const DEFAULT_FILTER: &str = "lumen=info,warn";

/// Install the tracing subscriber. Call once, before the terminal is taken
/// over.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "lumen.log");
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("lumen starting, logging to {}", log_dir.display());
    Ok(())
}

/// `~/.local/share/lumen/logs` on Linux, the platform equivalent elsewhere.
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lumen")
        .join("logs")
}
