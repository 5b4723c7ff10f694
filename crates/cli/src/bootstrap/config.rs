use bitdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    Ok(config)
}

/// Log the effective settings. The password is never logged.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    let registry = &config.registry;

    info!(
        config_file = config_path.unwrap_or("default"),
        server = registry.server.as_deref().unwrap_or("<unset>"),
        username = %registry.username,
        refresh_interval = registry.refresh_interval,
        reserved_suffix = %registry.reserved_suffix,
        refresh_mode = ?registry.refresh_mode,
        "Configuration loaded"
    );
}
