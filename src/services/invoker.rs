//! Single-shot prompt invocation.

use crate::domain::{AppError, PromptChain, PromptTemplate};
use crate::ports::CompletionClient;

/// Fill `template` with `input` and send the result to the endpoint.
///
/// Stateless: one fill, one network call, output returned verbatim. Endpoint
/// failures propagate unchanged.
pub fn invoke(
    input: &str,
    template: &PromptTemplate,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let request = template.fill(input)?;
    client.complete(request.text())
}

/// Run an input through a chain's template.
pub fn run_chain(
    chain: &PromptChain,
    input: &str,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    invoke(input, chain.template(), client)
}
