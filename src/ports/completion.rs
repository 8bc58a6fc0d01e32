//! Completion endpoint port definition.

use crate::domain::AppError;

/// Port for a remote text-generation endpoint.
///
/// One blocking network round trip per call; implementations return the
/// endpoint's output verbatim and propagate failures unchanged.
pub trait CompletionClient {
    /// Send a prompt and return the generated text.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Mock client for exercising flows without network calls.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would send prompt to completion endpoint:");
        println!("  Prompt length: {} chars", prompt.len());

        Ok(format!("mock-completion-{}", chrono::Utc::now().timestamp()))
    }
}
