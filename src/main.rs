//! Timestamper
//!
//! Converts a fixed list of video frame markers into `MM:SS label` lines
//! on stdout, for annotating match highlights.

mod config;
mod config_file;
mod converter;
mod error;
mod markers;
mod types;

#[cfg(test)]
mod integration;

use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LogFormat};
use crate::error::Result;
use crate::markers::{reference_markers, FRAME_RATE};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "timestamper";

/// Default configuration file path
const DEFAULT_CONFIG_PATH: &str = "timestamper.toml";

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, load_error) = load_config(&config_path);

    init_logging(&config);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    tracing::debug!("Configuration loaded: {:?}", config);

    let stdout = std::io::stdout();
    let written = run(&mut stdout.lock())?;
    tracing::info!("Wrote {} timestamp(s) at {}", written, FRAME_RATE);

    Ok(())
}

/// Write every reference marker as a timestamp line
fn run<W: Write>(out: &mut W) -> Result<usize> {
    converter::write_timestamps(out, &reference_markers(), FRAME_RATE)
}

/// Load the config file if present, falling back to defaults
///
/// Logging is not up yet, so a load failure is handed back to the caller.
fn load_config(path: &str) -> (AppConfig, Option<error::TimestampError>) {
    if !std::path::Path::new(path).exists() {
        return (AppConfig::default(), None);
    }
    match config_file::ConfigFile::from_file(path).and_then(|cf| cf.into_app_config()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Initialize logging with tracing
///
/// Logs go to stderr; stdout carries only timestamp lines.
fn init_logging(config: &AppConfig) {
    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(pretty)
        .with(json)
        .init();
}
