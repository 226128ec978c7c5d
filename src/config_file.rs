//! Configuration file support
//!
//! Loads logging settings from TOML files.

use serde::Deserialize;
use std::path::Path;

use crate::config::{AppConfig, LogFormat};
use crate::error::{Result, TimestampError};

/// Configuration file format
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| TimestampError::Config(e.to_string()))
    }

    /// Convert to AppConfig
    pub fn into_app_config(self) -> Result<AppConfig> {
        let Some(logging) = self.logging else {
            return Ok(AppConfig::default());
        };
        let log_format = match logging.format {
            Some(format) => format.parse()?,
            None => LogFormat::default(),
        };
        Ok(AppConfig {
            log_level: logging.level,
            log_format,
        })
    }
}
