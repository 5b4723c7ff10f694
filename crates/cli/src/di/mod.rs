use bitdns_application::ports::NameResolverPort;
use bitdns_application::use_cases::{
    GetNameCacheStatsUseCase, RefreshNamesUseCase, ResolveNameUseCase,
};
use bitdns_application::NameCache;
use bitdns_domain::RegistryConfig;
use bitdns_infrastructure::{HttpRegistryClient, SystemClock};
use std::sync::Arc;

/// Name cache wired to the HTTP registry client and the system clock.
pub struct NameServices {
    pub cache: Arc<NameCache>,
    pub resolve: ResolveNameUseCase,
    pub refresh: RefreshNamesUseCase,
    pub stats: GetNameCacheStatsUseCase,
}

impl NameServices {
    pub fn build(config: &RegistryConfig) -> anyhow::Result<Self> {
        let client = Arc::new(HttpRegistryClient::from_config(config)?);
        let cache = Arc::new(NameCache::new(client, Arc::new(SystemClock), config.clone()));
        let port: Arc<dyn NameResolverPort> = cache.clone();

        Ok(Self {
            resolve: ResolveNameUseCase::new(port.clone()),
            refresh: RefreshNamesUseCase::new(port.clone()),
            stats: GetNameCacheStatsUseCase::new(port),
            cache,
        })
    }

    pub fn resolver(&self) -> Arc<dyn NameResolverPort> {
        self.cache.clone()
    }
}
