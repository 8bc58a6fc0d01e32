mod completion_http;
mod invoker;
mod prompt_library;
mod registrar;
mod tracking_http;

pub use completion_http::HttpCompletionClient;
pub use invoker::{invoke, run_chain};
pub use prompt_library::{TemplateSummary, builtin, summaries};
pub use registrar::{ChainRegistrar, RegistrationOutcome};
pub use tracking_http::HttpTrackingClient;
