use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::registry::RegistryEndpoint;

/// When the name cache refreshes its snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// A lookup that finds the snapshot stale refreshes it before answering.
    #[default]
    OnLookup,
    /// Lookups never block; a background job refreshes every interval.
    Background,
}

/// Registry daemon connection and name cache policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Registry daemon address as "host:port". No refresh is attempted while unset.
    #[serde(default)]
    pub server: Option<String>,

    /// RPC username (default: empty)
    #[serde(default)]
    pub username: String,

    /// RPC password (default: empty)
    #[serde(default)]
    pub password: String,

    /// Seconds before a cached snapshot is considered stale (default: 600)
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Top-level suffix handled by this resolver, leading dot included (default: ".bit")
    #[serde(default = "default_reserved_suffix")]
    pub reserved_suffix: String,

    /// Registry namespace prefix for domain registrations (default: "d/")
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Largest accepted scan response in bytes (default: 256 KiB)
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,

    /// Request timeout in seconds, 0 disables it (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default)]
    pub refresh_mode: RefreshMode,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            server: None,
            username: String::new(),
            password: String::new(),
            refresh_interval: default_refresh_interval(),
            reserved_suffix: default_reserved_suffix(),
            name_prefix: default_name_prefix(),
            max_response_bytes: default_max_response_bytes(),
            request_timeout: default_request_timeout(),
            refresh_mode: RefreshMode::default(),
        }
    }
}

impl RegistryConfig {
    /// Outbound identity for the next refresh, if a server is configured.
    pub fn endpoint(&self) -> Option<RegistryEndpoint> {
        self.server.as_ref().map(|server| RegistryEndpoint {
            server: server.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Trim and lower-case the server address. A blank server counts as unset.
    pub fn normalize(&mut self) {
        self.server = self
            .server
            .take()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
    }

    /// Settings that differ from `other` but only take effect on restart:
    /// the transport limits are fixed when the HTTP client is built and the
    /// background refresh period when its job starts.
    pub fn restart_required_changes(&self, other: &RegistryConfig) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.max_response_bytes != other.max_response_bytes {
            changed.push("max_response_bytes");
        }
        if self.request_timeout != other.request_timeout {
            changed.push("request_timeout");
        }
        if self.refresh_mode == RefreshMode::Background
            && self.refresh_interval != other.refresh_interval
        {
            changed.push("refresh_interval");
        }
        changed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(server) = &self.server {
            validate_server(server)?;
        }

        if self.refresh_interval == 0 {
            return Err(ConfigError::Invalid(
                "registry.refresh_interval must be greater than 0".to_string(),
            ));
        }

        let suffix_ok = self
            .reserved_suffix
            .strip_prefix('.')
            .is_some_and(|label| !label.is_empty() && !label.contains('.'));
        if !suffix_ok {
            return Err(ConfigError::Invalid(format!(
                "registry.reserved_suffix must be a single dotted label like \".bit\", got {:?}",
                self.reserved_suffix
            )));
        }

        if self.name_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "registry.name_prefix must not be empty".to_string(),
            ));
        }

        if self.max_response_bytes == 0 {
            return Err(ConfigError::Invalid(
                "registry.max_response_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_server(server: &str) -> Result<(), ConfigError> {
    let valid = server
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());

    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "registry.server must be host:port, got {:?}",
            server
        )))
    }
}

fn default_refresh_interval() -> u64 {
    600
}

fn default_reserved_suffix() -> String {
    ".bit".to_string()
}

fn default_name_prefix() -> String {
    "d/".to_string()
}

fn default_max_response_bytes() -> usize {
    256 * 1024
}

fn default_request_timeout() -> u64 {
    30
}
