//! Prompt chain: the unit that is executed, logged, and registered.

use crate::domain::template::PromptTemplate;

/// A prompt template paired with the key its output is recorded under.
///
/// The chain is what gets packaged when a run is logged to the tracking
/// server: its template drives the invocation, and its output key names the
/// single output column of the inferred signature.
#[derive(Debug, Clone)]
pub struct PromptChain {
    template: PromptTemplate,
    output_key: String,
}

impl PromptChain {
    /// Pair a template with an output key.
    pub fn new(template: PromptTemplate, output_key: impl Into<String>) -> Self {
        Self { template, output_key: output_key.into() }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }
}
