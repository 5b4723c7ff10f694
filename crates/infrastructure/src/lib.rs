//! Bitdns Infrastructure Layer
pub mod registry;
pub mod system;

pub use registry::HttpRegistryClient;
pub use system::SystemClock;
