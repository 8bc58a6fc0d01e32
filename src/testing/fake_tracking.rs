use std::cell::RefCell;

use crate::domain::{AppError, ChainSignature, PromptChain, QualifiedModelName};
use crate::ports::{LoggedRun, RegisteredVersion, TrackingClient};

/// In-memory tracking client recording the calls it receives.
#[derive(Debug, Default)]
pub struct FakeTrackingClient {
    calls: RefCell<Vec<String>>,
    fail_after: Option<usize>,
}

impl FakeTrackingClient {
    /// Succeed for the first `n` calls, then fail every call.
    pub fn failing_after(n: usize) -> Self {
        Self { calls: RefCell::new(Vec::new()), fail_after: Some(n) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        if let Some(n) = self.fail_after {
            if self.calls.borrow().len() > n {
                return Err(AppError::TrackingError {
                    message: "injected failure".to_string(),
                    status: Some(500),
                });
            }
        }
        Ok(())
    }
}

impl TrackingClient for FakeTrackingClient {
    fn get_or_create_experiment(&self, name: &str) -> Result<String, AppError> {
        self.record(format!("get_or_create_experiment({})", name))?;
        Ok("exp-1".to_string())
    }

    fn log_chain_run(
        &self,
        experiment_id: &str,
        chain: &PromptChain,
        _signature: &ChainSignature,
        artifact_path: &str,
        _input_example: &str,
    ) -> Result<LoggedRun, AppError> {
        self.record(format!(
            "log_chain_run({}, {}, {})",
            experiment_id,
            chain.template().name(),
            artifact_path
        ))?;
        Ok(LoggedRun { run_id: "run-1".to_string() })
    }

    fn register_chain(
        &self,
        artifact_uri: &str,
        name: &QualifiedModelName,
    ) -> Result<RegisteredVersion, AppError> {
        self.record(format!("register_chain({}, {})", artifact_uri, name))?;
        Ok(RegisteredVersion { name: name.to_string(), version: "1".to_string() })
    }
}
