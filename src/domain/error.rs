use std::io;

use thiserror::Error;

use crate::domain::template::TemplateError;

/// Library-wide error type for promptlab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Config file missing at the expected location.
    #[error("Config not found: {0}. Create promptlab.toml first.")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Template construction or fill failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// No built-in template with the given name.
    #[error("Template '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// Registered model name is not a valid catalog-qualified name.
    #[error(
        "Invalid model name '{0}': expected catalog.schema.name with alphanumeric segments (hyphens and underscores allowed)"
    )]
    InvalidModelName(String),

    /// Completion endpoint request failed.
    #[error("Endpoint error{}: {message}", fmt_status(status))]
    EndpointError { message: String, status: Option<u16> },

    /// Tracking server request failed.
    #[error("Tracking error{}: {message}", fmt_status(status))]
    TrackingError { message: String, status: Option<u16> },
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
