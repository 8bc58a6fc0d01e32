//! Register command: log the configured chain and register the artifact.

use crate::domain::{AppError, LabConfig, PromptChain, QualifiedModelName};
use crate::ports::TrackingClient;
use crate::services::{self, ChainRegistrar, RegistrationOutcome};

/// Output key the chain's response column is recorded under.
const OUTPUT_KEY: &str = "response";

/// Input example logged alongside the chain.
const INPUT_EXAMPLE: &str = "How can I speed up my join operations?";

/// Options for chain registration.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Built-in template to package as the chain.
    pub template: String,
}

/// Execute the register command.
pub fn execute(
    tracking: &dyn TrackingClient,
    config: &LabConfig,
    options: &RegisterOptions,
) -> Result<RegistrationOutcome, AppError> {
    let template = services::builtin(&options.template)?;
    let chain = PromptChain::new(template, OUTPUT_KEY);

    let name = QualifiedModelName::new(
        config.tracking.registry.catalog.as_str(),
        config.tracking.registry.schema.as_str(),
        config.tracking.model_name.as_str(),
    )?;

    ChainRegistrar::new(tracking).register(
        &chain,
        &config.tracking.experiment,
        &config.tracking.model_name,
        &name,
        INPUT_EXAMPLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTrackingClient;

    #[test]
    fn registers_configured_chain_under_qualified_name() {
        let tracking = FakeTrackingClient::default();
        let config = LabConfig::default();
        let options = RegisterOptions { template: "support".to_string() };

        let outcome = execute(&tracking, &config, &options).unwrap();

        assert_eq!(outcome.version.name, "main.genai.support-chain");
        assert_eq!(outcome.model_uri, "runs:/run-1/support-chain");
        assert_eq!(tracking.calls().len(), 3);
    }

    #[test]
    fn invalid_model_name_fails_before_any_tracking_call() {
        let tracking = FakeTrackingClient::default();
        let mut config = LabConfig::default();
        config.tracking.model_name = "not a valid name".to_string();
        let options = RegisterOptions { template: "support".to_string() };

        let err = execute(&tracking, &config, &options).unwrap_err();

        assert!(matches!(err, AppError::InvalidModelName(_)));
        assert!(tracking.calls().is_empty());
    }
}
