//! Tracking server port definition.

use crate::domain::{AppError, ChainSignature, PromptChain, QualifiedModelName};

/// A run recorded on the tracking server.
#[derive(Debug, Clone)]
pub struct LoggedRun {
    /// Run ID assigned by the tracking server.
    pub run_id: String,
}

/// A model version created in the registry.
#[derive(Debug, Clone)]
pub struct RegisteredVersion {
    /// Dotted catalog-qualified name the version was registered under.
    pub name: String,
    /// Version assigned by the registry.
    pub version: String,
}

/// Port for tracking server operations.
///
/// Three independent calls; the tracking platform owns storage and
/// versioning, this port only assembles the call arguments.
pub trait TrackingClient {
    /// Start or reuse a named experiment, returning its ID.
    fn get_or_create_experiment(&self, name: &str) -> Result<String, AppError>;

    /// Record a run holding the packaged chain, its signature, and an input
    /// example under `artifact_path`.
    fn log_chain_run(
        &self,
        experiment_id: &str,
        chain: &PromptChain,
        signature: &ChainSignature,
        artifact_path: &str,
        input_example: &str,
    ) -> Result<LoggedRun, AppError>;

    /// Register a logged artifact under a catalog-qualified name.
    fn register_chain(
        &self,
        artifact_uri: &str,
        name: &QualifiedModelName,
    ) -> Result<RegisteredVersion, AppError>;
}

/// Mock client for exercising the register flow without a tracking server.
#[derive(Debug, Clone, Default)]
pub struct MockTrackingClient;

impl TrackingClient for MockTrackingClient {
    fn get_or_create_experiment(&self, name: &str) -> Result<String, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would start or reuse experiment '{}'", name);
        Ok(format!("mock-experiment-{}", chrono::Utc::now().timestamp()))
    }

    fn log_chain_run(
        &self,
        experiment_id: &str,
        chain: &PromptChain,
        signature: &ChainSignature,
        artifact_path: &str,
        _input_example: &str,
    ) -> Result<LoggedRun, AppError> {
        println!("Would log run under experiment {}:", experiment_id);
        println!("  Template: {}", chain.template().name());
        println!("  Artifact path: {}", artifact_path);
        println!("  Signature inputs: {}", signature.inputs.len());

        Ok(LoggedRun { run_id: format!("mock-run-{}", chrono::Utc::now().timestamp()) })
    }

    fn register_chain(
        &self,
        artifact_uri: &str,
        name: &QualifiedModelName,
    ) -> Result<RegisteredVersion, AppError> {
        println!("Would register {} as {}", artifact_uri, name);
        Ok(RegisteredVersion { name: name.to_string(), version: "1".to_string() })
    }
}
