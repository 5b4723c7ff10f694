use crate::ports::NameResolverPort;
use bitdns_domain::DomainError;
use std::sync::Arc;

pub struct RefreshNamesUseCase {
    resolver: Arc<dyn NameResolverPort>,
}

impl RefreshNamesUseCase {
    pub fn new(resolver: Arc<dyn NameResolverPort>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        self.resolver.refresh().await
    }
}
