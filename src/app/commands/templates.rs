//! Templates command: list the built-in prompt library.

use crate::services::{self, TemplateSummary};

/// Summaries of all built-in templates.
pub fn execute() -> Vec<TemplateSummary> {
    services::summaries()
}
