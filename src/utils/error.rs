use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Fetch failures are values the pipeline degrades on, not errors that
/// propagate past the component boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    #[error("target unreachable (network error or timeout)")]
    Unreachable,

    #[error("unexpected HTTP status: {0}")]
    BadStatus(u16),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
