use thiserror::Error;

/// Main error type for the timestamper
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid frame rate: {0} (must be positive)")]
    InvalidFrameRate(u32),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TimestampError>;
