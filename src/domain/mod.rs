pub mod chain;
pub mod configuration;
pub mod error;
pub mod registry;
pub mod signature;
pub mod template;

pub use chain::PromptChain;
pub use configuration::{EndpointConfig, LabConfig, RegistryConfig, TrackingConfig};
pub use error::AppError;
pub use registry::QualifiedModelName;
pub use signature::{ChainSignature, ColumnSpec};
pub use template::{PromptRequest, PromptTemplate, TemplateError};
