use async_trait::async_trait;
use bitdns_domain::{DomainError, RegistryEndpoint};

/// Application-layer port for the registry daemon.
///
/// One call issues exactly one `name_scan` request; implementations never
/// retry. The returned body is the raw, size-bounded JSON text.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn fetch_snapshot(&self, endpoint: &RegistryEndpoint) -> Result<String, DomainError>;
}
