use crate::ports::{NameCacheStats, NameResolverPort};
use std::sync::Arc;

pub struct GetNameCacheStatsUseCase {
    resolver: Arc<dyn NameResolverPort>,
}

impl GetNameCacheStatsUseCase {
    pub fn new(resolver: Arc<dyn NameResolverPort>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self) -> NameCacheStats {
        self.resolver.stats()
    }
}
