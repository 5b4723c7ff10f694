use bitdns_application::ports::NameResolverPort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Refreshes the name cache on a fixed schedule so lookups never block.
///
/// The first tick is skipped: the snapshot is expected to have been loaded
/// at startup.
pub struct RegistryRefreshJob {
    resolver: Arc<dyn NameResolverPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RegistryRefreshJob {
    pub fn new(resolver: Arc<dyn NameResolverPort>) -> Self {
        Self {
            resolver,
            interval_secs: 600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting registry refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RegistryRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.resolver.refresh().await {
                            Ok(entries) => info!(entries, "RegistryRefreshJob: refresh completed"),
                            Err(e) => error!(error = %e, "RegistryRefreshJob: refresh failed"),
                        }
                    }
                }
            }
        })
    }
}
