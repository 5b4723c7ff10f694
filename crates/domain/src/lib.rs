//! Bitdns Domain Layer
pub mod config;
pub mod errors;
pub mod name;
pub mod registry;

pub use config::{CliOverrides, Config, ConfigError, RefreshMode, RegistryConfig};
pub use errors::DomainError;
pub use registry::{NameSnapshot, RegistryEndpoint, RegistryRecord, ResolvedEntry};
