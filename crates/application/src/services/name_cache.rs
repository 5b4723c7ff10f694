use crate::ports::{Clock, NameCacheStats, NameResolverPort, RegistryClient};
use arc_swap::{ArcSwap, ArcSwapOption};
use async_trait::async_trait;
use bitdns_domain::name::lookup_key;
use bitdns_domain::{DomainError, NameSnapshot, RefreshMode, RegistryConfig, ResolvedEntry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Timestamp sentinel for "never happened".
const NEVER: u64 = u64::MAX;

#[derive(Default)]
struct NameCacheMetrics {
    refreshes_ok: AtomicU64,
    refreshes_failed: AtomicU64,
    lookups: AtomicU64,
    hits: AtomicU64,
}

/// Refreshable cache of every name registered under the reserved suffix.
///
/// The current `NameSnapshot` is published through `ArcSwapOption`, so a
/// lookup sees either the previous snapshot or the new one, never a
/// half-built map. A failed refresh leaves the published snapshot untouched.
///
/// Refreshes are serialized by `refresh_lock`. Staleness is measured from the
/// last refresh attempt, successful or not, so a registry outage costs one
/// failed fetch per interval instead of one per lookup.
pub struct NameCache {
    client: Arc<dyn RegistryClient>,
    clock: Arc<dyn Clock>,
    config: ArcSwap<RegistryConfig>,
    snapshot: ArcSwapOption<NameSnapshot>,
    last_attempt: AtomicU64,
    last_success: AtomicU64,
    refresh_lock: Mutex<()>,
    metrics: NameCacheMetrics,
}

impl NameCache {
    pub fn new(
        client: Arc<dyn RegistryClient>,
        clock: Arc<dyn Clock>,
        mut config: RegistryConfig,
    ) -> Self {
        config.normalize();

        Self {
            client,
            clock,
            config: ArcSwap::from_pointee(config),
            snapshot: ArcSwapOption::empty(),
            last_attempt: AtomicU64::new(NEVER),
            last_success: AtomicU64::new(NEVER),
            refresh_lock: Mutex::new(()),
            metrics: NameCacheMetrics::default(),
        }
    }

    pub fn config(&self) -> Arc<RegistryConfig> {
        self.config.load_full()
    }

    /// Currently published snapshot, `None` until the first successful refresh.
    pub fn snapshot(&self) -> Option<Arc<NameSnapshot>> {
        self.snapshot.load_full()
    }

    pub fn is_stale(&self) -> bool {
        let last = self.last_attempt.load(Ordering::Acquire);
        if last == NEVER {
            return true;
        }

        let interval = self.config.load().refresh_interval;
        self.clock.now_secs().saturating_sub(last) >= interval
    }

    /// Resolve `name` to the bare-name address registered for it.
    ///
    /// Names outside the reserved suffix are rejected before any refresh is
    /// considered. In `on_lookup` mode a stale snapshot is refreshed first;
    /// the lookup proceeds against whatever snapshot is current afterwards.
    pub async fn resolve(&self, name: &str) -> Option<Arc<str>> {
        let (key, mode) = {
            let config = self.config.load();
            (
                lookup_key(name, &config.reserved_suffix)?,
                config.refresh_mode,
            )
        };

        self.metrics.lookups.fetch_add(1, Ordering::Relaxed);

        if mode == RefreshMode::OnLookup {
            self.refresh_if_stale().await;
        }

        let snapshot = self.snapshot.load_full()?;
        let raw = snapshot.get(key)?;

        match ResolvedEntry::decode(raw) {
            Ok(entry) => {
                let address: Option<Arc<str>> = entry.bare_address().map(Arc::from);
                if address.is_some() {
                    self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                } else {
                    debug!(name, "Registry entry has no bare-name address");
                }
                address
            }
            Err(e) => {
                warn!(name, error = %e, "Ignoring malformed registry entry");
                None
            }
        }
    }

    /// Refresh only if the snapshot is stale. Returns whether a refresh ran.
    ///
    /// Staleness is checked again once the refresh lock is held, so lookups
    /// racing past the first check trigger a single fetch between them.
    pub async fn refresh_if_stale(&self) -> bool {
        if !self.is_stale() {
            return false;
        }

        let _guard = self.refresh_lock.lock().await;
        if !self.is_stale() {
            debug!("Snapshot already refreshed by a concurrent lookup");
            return false;
        }

        // Failures are logged inside; the lookup carries on with the old snapshot.
        let _ = self.refresh_locked().await;
        true
    }

    /// Fetch and publish a new snapshot regardless of its age.
    pub async fn refresh(&self) -> Result<usize, DomainError> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Swap in a new configuration. A changed server triggers an immediate
    /// refresh; credential changes are picked up by the next refresh.
    /// Unsetting the server drops the published snapshot.
    pub async fn reconfigure(&self, mut config: RegistryConfig) -> Result<(), DomainError> {
        config.normalize();
        let server = config.server.clone();
        let previous = self.config.swap(Arc::new(config));

        if previous.server == server {
            return Ok(());
        }

        let _guard = self.refresh_lock.lock().await;
        if server.is_none() {
            info!("Registry server unset, dropping cached names");
            self.snapshot.store(None);
        } else {
            info!(server = ?server, "Registry server changed, refreshing names");
        }

        self.refresh_locked().await.map(|_| ())
    }

    pub fn stats(&self) -> NameCacheStats {
        NameCacheStats {
            entries: self.snapshot.load_full().map_or(0, |s| s.len()),
            last_attempt_secs: timestamp(&self.last_attempt),
            last_success_secs: timestamp(&self.last_success),
            refreshes_ok: self.metrics.refreshes_ok.load(Ordering::Relaxed),
            refreshes_failed: self.metrics.refreshes_failed.load(Ordering::Relaxed),
            lookups: self.metrics.lookups.load(Ordering::Relaxed),
            hits: self.metrics.hits.load(Ordering::Relaxed),
        }
    }

    // Caller must hold `refresh_lock`.
    async fn refresh_locked(&self) -> Result<usize, DomainError> {
        let config = self.config.load_full();
        let now = self.clock.now_secs();

        // `last_attempt` is stamped only after the outcome is published, so
        // lookups arriving mid-fetch still see a stale cache and queue on the lock.
        match self.fetch_snapshot(&config).await {
            Ok(snapshot) => {
                let entries = snapshot.len();
                self.snapshot.store(Some(Arc::new(snapshot)));
                self.last_success.store(now, Ordering::Release);
                self.last_attempt.store(now, Ordering::Release);
                self.metrics.refreshes_ok.fetch_add(1, Ordering::Relaxed);

                info!(
                    entries,
                    server = config.server.as_deref().unwrap_or_default(),
                    "Registry names refreshed"
                );
                Ok(entries)
            }
            Err(e) => {
                self.last_attempt.store(now, Ordering::Release);
                self.metrics.refreshes_failed.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Registry refresh failed, keeping previous snapshot");
                Err(e)
            }
        }
    }

    async fn fetch_snapshot(&self, config: &RegistryConfig) -> Result<NameSnapshot, DomainError> {
        let endpoint = config
            .endpoint()
            .ok_or(DomainError::RegistryNotConfigured)?;

        let body = self.client.fetch_snapshot(&endpoint).await?;
        NameSnapshot::from_scan_response(&body, &config.name_prefix)
    }
}

fn timestamp(value: &AtomicU64) -> Option<u64> {
    match value.load(Ordering::Acquire) {
        NEVER => None,
        secs => Some(secs),
    }
}

#[async_trait]
impl NameResolverPort for NameCache {
    async fn resolve(&self, name: &str) -> Option<Arc<str>> {
        NameCache::resolve(self, name).await
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        NameCache::refresh(self).await
    }

    fn stats(&self) -> NameCacheStats {
        NameCache::stats(self)
    }
}
