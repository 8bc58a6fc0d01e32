pub mod lab_config;

pub use lab_config::{EndpointConfig, LabConfig, RegistryConfig, TrackingConfig};
