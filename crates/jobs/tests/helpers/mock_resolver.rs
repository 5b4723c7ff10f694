#![allow(dead_code)]

use async_trait::async_trait;
use bitdns_application::ports::{NameCacheStats, NameResolverPort};
use bitdns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock NameResolverPort
// ============================================================================

pub struct MockNameResolver {
    refresh_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self {
            refresh_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NameResolverPort for MockNameResolver {
    async fn resolve(&self, _name: &str) -> Option<Arc<str>> {
        None
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        self.refresh_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::RegistryTransport(
                "connection refused".to_string(),
            ));
        }
        Ok(3)
    }

    fn stats(&self) -> NameCacheStats {
        NameCacheStats {
            refreshes_ok: self.refresh_count(),
            ..Default::default()
        }
    }
}
