//! Registry data as seen by the name cache.
//!
//! A `NameSnapshot` is built wholesale from one name-scan response and is
//! never mutated afterwards. Values stay raw until a lookup decodes one into
//! a `ResolvedEntry`.

pub mod endpoint;
pub mod entry;
pub mod snapshot;

pub use endpoint::RegistryEndpoint;
pub use entry::ResolvedEntry;
pub use snapshot::{NameSnapshot, RegistryRecord};
