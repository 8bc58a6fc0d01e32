//! Lab configuration domain models.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `promptlab.toml`.
///
/// API tokens never live here; they come from `PROMPTLAB_ENDPOINT_TOKEN` and
/// `PROMPTLAB_TRACKING_TOKEN`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    /// Completion endpoint configuration.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Tracking server configuration.
    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl LabConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: LabConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.endpoint.validate()?;
        self.tracking.validate()?;
        Ok(())
    }
}

/// Completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Completion endpoint URL.
    #[serde(default = "default_endpoint_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum output tokens per completion; omit for no bound.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("endpoint.timeout_secs must be greater than 0"));
        }
        if self.max_tokens == Some(0) {
            return Err(AppError::config_error("endpoint.max_tokens must be greater than 0"));
        }
        Ok(())
    }
}

/// Tracking server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackingConfig {
    /// Tracking server base URL.
    #[serde(default = "default_tracking_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Experiment name runs are recorded under.
    #[serde(default = "default_experiment")]
    pub experiment: String,
    /// Artifact path and registered model name for the packaged chain.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Registry location for catalog-qualified names.
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            url: default_tracking_url(),
            timeout_secs: default_timeout(),
            experiment: default_experiment(),
            model_name: default_model_name(),
            registry: RegistryConfig::default(),
        }
    }
}

impl TrackingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("tracking.timeout_secs must be greater than 0"));
        }
        if self.experiment.trim().is_empty() {
            return Err(AppError::config_error("tracking.experiment must not be empty"));
        }
        if self.model_name.trim().is_empty() {
            return Err(AppError::config_error("tracking.model_name must not be empty"));
        }
        Ok(())
    }
}

/// Catalog and schema a registered chain is filed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { catalog: default_catalog(), schema: default_schema() }
    }
}

fn default_endpoint_url() -> Url {
    Url::parse("http://127.0.0.1:8000/invocations").expect("Default endpoint URL must be valid")
}

fn default_tracking_url() -> Url {
    Url::parse("http://127.0.0.1:5000").expect("Default tracking URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_max_tokens() -> Option<u32> {
    Some(400)
}

fn default_experiment() -> String {
    "prompt-engineering".to_string()
}

fn default_model_name() -> String {
    "support-chain".to_string()
}

fn default_catalog() -> String {
    "main".to_string()
}

fn default_schema() -> String {
    "genai".to_string()
}
