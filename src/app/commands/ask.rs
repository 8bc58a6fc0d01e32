//! Ask command: direct endpoint call without a template.

use crate::domain::AppError;
use crate::ports::CompletionClient;

/// Send the question to the endpoint as-is and return the response verbatim.
pub fn execute(client: &dyn CompletionClient, question: &str) -> Result<String, AppError> {
    client.complete(question)
}
