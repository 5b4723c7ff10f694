use crate::bootstrap;
use crate::di::NameServices;
use bitdns_application::NameCache;
use bitdns_domain::{CliOverrides, RefreshMode};
use bitdns_jobs::RegistryRefreshJob;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Answer one name per stdin line until EOF or Ctrl+C.
///
/// The snapshot is loaded once up front and then kept fresh by
/// `RegistryRefreshJob`; lookups never wait on the registry. On unix, SIGHUP
/// re-reads the configuration and reconfigures the cache.
pub async fn run_stdin_shim(
    services: &NameServices,
    config_path: Option<&str>,
    overrides: &CliOverrides,
) -> anyhow::Result<()> {
    match services.refresh.execute().await {
        Ok(entries) => info!(entries, "Initial registry snapshot loaded"),
        Err(e) => warn!(error = %e, "Initial registry refresh failed, serving without names"),
    }

    let shutdown = CancellationToken::new();
    let interval = services.cache.config().refresh_interval;

    let refresh_job = RegistryRefreshJob::new(services.resolver())
        .with_interval(interval)
        .with_cancellation(shutdown.clone());
    let _refresh_handle = Arc::new(refresh_job).start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut hangup = hangup_signal()?;

    info!("Reading names from stdin");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                break;
            }
            _ = next_hangup(&mut hangup) => {
                reload(&services.cache, config_path, overrides).await;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let name = line.trim();
                if !name.is_empty() {
                    super::answer(&services.resolve, name).await;
                }
            }
        }
    }

    shutdown.cancel();

    let stats = services.stats.execute();
    info!(
        lookups = stats.lookups,
        hits = stats.hits,
        entries = stats.entries,
        refreshes_ok = stats.refreshes_ok,
        refreshes_failed = stats.refreshes_failed,
        "Shim stopped"
    );

    Ok(())
}

async fn reload(cache: &NameCache, config_path: Option<&str>, overrides: &CliOverrides) {
    let mut config = match bootstrap::load_config(config_path, overrides.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration reload failed, keeping current settings");
            return;
        }
    };

    config.registry.refresh_mode = RefreshMode::Background;
    bootstrap::log_config(config_path, &config);

    let ignored = cache.config().restart_required_changes(&config.registry);
    if !ignored.is_empty() {
        warn!(settings = ?ignored, "Changed registry settings take effect after a restart");
    }

    if let Err(e) = cache.reconfigure(config.registry).await {
        error!(error = %e, "Refresh after reconfiguration failed");
    }
}

#[cfg(unix)]
type Hangup = tokio::signal::unix::Signal;

#[cfg(unix)]
fn hangup_signal() -> std::io::Result<Hangup> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::hangup())
}

#[cfg(unix)]
async fn next_hangup(hangup: &mut Hangup) {
    if hangup.recv().await.is_none() {
        std::future::pending::<()>().await;
    }
}

#[cfg(not(unix))]
struct Hangup;

#[cfg(not(unix))]
fn hangup_signal() -> std::io::Result<Hangup> {
    Ok(Hangup)
}

#[cfg(not(unix))]
async fn next_hangup(_hangup: &mut Hangup) {
    std::future::pending::<()>().await;
}
