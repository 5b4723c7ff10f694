use crate::ports::NameResolverPort;
use std::sync::Arc;
use tracing::debug;

pub struct ResolveNameUseCase {
    resolver: Arc<dyn NameResolverPort>,
}

impl ResolveNameUseCase {
    pub fn new(resolver: Arc<dyn NameResolverPort>) -> Self {
        Self { resolver }
    }

    /// Returns `None` when the name is not handled here or has no address;
    /// the caller should fall back to conventional DNS.
    pub async fn execute(&self, name: &str) -> Option<Arc<str>> {
        let name = name.trim().trim_end_matches('.');
        let address = self.resolver.resolve(name).await;

        debug!(name, resolved = address.is_some(), "Registry lookup");
        address
    }
}
