use async_trait::async_trait;
use bitdns_domain::DomainError;
use std::sync::Arc;

/// Point-in-time counters for the name cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCacheStats {
    pub entries: usize,
    pub last_attempt_secs: Option<u64>,
    pub last_success_secs: Option<u64>,
    pub refreshes_ok: u64,
    pub refreshes_failed: u64,
    pub lookups: u64,
    pub hits: u64,
}

/// Port consumed by callers that resolve reserved-suffix names before falling
/// back to conventional DNS.
///
/// `resolve` never fails: every refresh or decoding problem is absorbed and
/// reported as "not resolved".
#[async_trait]
pub trait NameResolverPort: Send + Sync {
    async fn resolve(&self, name: &str) -> Option<Arc<str>>;

    /// Fetch and publish a new snapshot unconditionally.
    /// Returns the number of names in the published snapshot.
    async fn refresh(&self) -> Result<usize, DomainError>;

    fn stats(&self) -> NameCacheStats;
}
