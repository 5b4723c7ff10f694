//! Configuration module for Bitdns
//!
//! - `root`: Main configuration and CLI overrides
//! - `registry`: Registry daemon endpoint, credentials and cache policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::{RefreshMode, RegistryConfig};
pub use root::{CliOverrides, Config};
