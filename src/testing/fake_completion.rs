use std::cell::Cell;

use crate::domain::AppError;
use crate::ports::CompletionClient;

/// Deterministic stub endpoint that echoes the received prompt.
#[derive(Debug, Default)]
pub struct EchoCompletionClient {
    calls: Cell<usize>,
}

impl EchoCompletionClient {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CompletionClient for EchoCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        Ok(prompt.to_string())
    }
}

/// Stub endpoint that fails on every call.
#[derive(Debug)]
pub struct FailingCompletionClient {
    message: String,
}

impl FailingCompletionClient {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl CompletionClient for FailingCompletionClient {
    fn complete(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::EndpointError { message: self.message.clone(), status: None })
    }
}
