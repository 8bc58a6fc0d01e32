//! promptlab: template prompts, invoke a hosted completion endpoint, and
//! register the resulting chain with a tracking server.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use domain::LabConfig;
use ports::{CompletionClient, MockCompletionClient, MockTrackingClient, TrackingClient};
use services::{HttpCompletionClient, HttpTrackingClient};

pub use app::commands::register::RegisterOptions;
pub use app::commands::run::RunOptions;
pub use domain::{AppError, PromptChain, PromptRequest, PromptTemplate, QualifiedModelName};
pub use services::{RegistrationOutcome, TemplateSummary, invoke};

/// Send a question directly to the completion endpoint.
pub fn ask(question: &str, config_path: &Path, mock: bool) -> Result<String, AppError> {
    let config = LabConfig::load(config_path)?;
    let client = completion_client(&config, mock)?;

    app::commands::ask::execute(client.as_ref(), question)
}

/// Fill a template with an input and invoke the endpoint.
pub fn run_template(
    options: &RunOptions,
    config_path: &Path,
    mock: bool,
) -> Result<String, AppError> {
    let config = LabConfig::load(config_path)?;
    let client = completion_client(&config, mock)?;

    app::commands::run::execute(client.as_ref(), options)
}

/// List the built-in prompt templates.
pub fn list_templates() -> Vec<TemplateSummary> {
    app::commands::templates::execute()
}

/// Log the configured chain as a tracked run and register the artifact.
pub fn register(
    options: &RegisterOptions,
    config_path: &Path,
    mock: bool,
) -> Result<RegistrationOutcome, AppError> {
    let config = LabConfig::load(config_path)?;
    let tracking = tracking_client(&config, mock)?;

    let outcome = app::commands::register::execute(tracking.as_ref(), &config, options)?;
    println!("✅ Logged run {} under experiment {}", outcome.run_id, outcome.experiment_id);
    println!("✅ Registered {} as version {}", outcome.version.name, outcome.version.version);
    Ok(outcome)
}

fn completion_client(
    config: &LabConfig,
    mock: bool,
) -> Result<Box<dyn CompletionClient>, AppError> {
    if mock {
        Ok(Box::new(MockCompletionClient))
    } else {
        Ok(Box::new(HttpCompletionClient::from_env(&config.endpoint)?))
    }
}

fn tracking_client(config: &LabConfig, mock: bool) -> Result<Box<dyn TrackingClient>, AppError> {
    if mock {
        Ok(Box::new(MockTrackingClient))
    } else {
        Ok(Box::new(HttpTrackingClient::from_env(&config.tracking)?))
    }
}
