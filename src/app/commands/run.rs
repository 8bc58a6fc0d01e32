//! Run command: fill a template with an input and invoke the endpoint.

use std::path::PathBuf;

use crate::domain::{AppError, PromptChain, PromptTemplate};
use crate::ports::CompletionClient;
use crate::services;

/// Output key the chain's response is recorded under.
const OUTPUT_KEY: &str = "response";

/// Options for a templated invocation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Built-in template name.
    pub template: Option<String>,
    /// Path to a template file, as an alternative to a built-in.
    pub template_file: Option<PathBuf>,
    /// Input variable name used when loading a template file.
    pub variable: String,
    /// The input substituted into the template.
    pub input: String,
}

/// Execute the run command.
pub fn execute(client: &dyn CompletionClient, options: &RunOptions) -> Result<String, AppError> {
    let template = resolve_template(options)?;
    let chain = PromptChain::new(template, OUTPUT_KEY);
    services::run_chain(&chain, &options.input, client)
}

fn resolve_template(options: &RunOptions) -> Result<PromptTemplate, AppError> {
    match (&options.template, &options.template_file) {
        (Some(name), None) => services::builtin(name),
        (None, Some(path)) => {
            let source = std::fs::read_to_string(path)?;
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("custom");
            Ok(PromptTemplate::new(name, source, options.variable.as_str())?)
        }
        (Some(_), Some(_)) => Err(AppError::config_error(
            "Specify either --template or --template-file, not both",
        )),
        (None, None) => Err(AppError::config_error(
            "A template is required: pass --template <name> or --template-file <path>",
        )),
    }
}
