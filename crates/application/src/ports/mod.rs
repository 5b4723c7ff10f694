pub mod clock;
pub mod name_resolver;
pub mod registry_client;

pub use clock::Clock;
pub use name_resolver::{NameCacheStats, NameResolverPort};
pub use registry_client::RegistryClient;
