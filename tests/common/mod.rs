//! Shared testing utilities for promptlab CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `promptlab` binary.
    ///
    /// Tokens are scrubbed from the environment so tests control them
    /// explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptlab").expect("Failed to locate promptlab binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("PROMPTLAB_ENDPOINT_TOKEN")
            .env_remove("PROMPTLAB_TRACKING_TOKEN");
        cmd
    }

    /// Write a `promptlab.toml` pointing at the given endpoint and tracking
    /// URLs.
    pub fn write_config(&self, endpoint_url: &str, tracking_url: &str) {
        let content = format!(
            r#"[endpoint]
url = "{}"
timeout_secs = 5
max_tokens = 400

[tracking]
url = "{}"
timeout_secs = 5
experiment = "prompt-engineering"
model_name = "support-chain"
"#,
            endpoint_url, tracking_url
        );

        fs::write(self.work_dir.join("promptlab.toml"), content)
            .expect("Failed to write test config");
    }
}
