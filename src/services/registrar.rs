//! Chain registration flow against the tracking server.

use crate::domain::{AppError, ChainSignature, PromptChain, QualifiedModelName};
use crate::ports::{RegisteredVersion, TrackingClient};

/// Outcome of registering a chain.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub experiment_id: String,
    pub run_id: String,
    pub model_uri: String,
    pub version: RegisteredVersion,
}

/// Records a chain as a tracked run and registers the logged artifact.
pub struct ChainRegistrar<'a> {
    tracking: &'a dyn TrackingClient,
}

impl<'a> ChainRegistrar<'a> {
    pub fn new(tracking: &'a dyn TrackingClient) -> Self {
        Self { tracking }
    }

    /// Infer the chain signature, log a run under `experiment`, and register
    /// the run's artifact under `name`.
    ///
    /// Tracking failures at any step propagate unchanged; there is no retry
    /// and no cleanup of partially recorded state.
    pub fn register(
        &self,
        chain: &PromptChain,
        experiment: &str,
        artifact_path: &str,
        name: &QualifiedModelName,
        input_example: &str,
    ) -> Result<RegistrationOutcome, AppError> {
        let signature = ChainSignature::infer(chain);

        let experiment_id = self.tracking.get_or_create_experiment(experiment)?;
        let run = self.tracking.log_chain_run(
            &experiment_id,
            chain,
            &signature,
            artifact_path,
            input_example,
        )?;

        let model_uri = format!("runs:/{}/{}", run.run_id, artifact_path);
        let version = self.tracking.register_chain(&model_uri, name)?;

        Ok(RegistrationOutcome { experiment_id, run_id: run.run_id, model_uri, version })
    }
}
