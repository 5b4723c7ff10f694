#![allow(dead_code)]

use async_trait::async_trait;
use bitdns_application::ports::{Clock, RegistryClient};
use bitdns_domain::{DomainError, RegistryConfig, RegistryEndpoint};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock RegistryClient
// ============================================================================

pub struct MockRegistryClient {
    response: Arc<RwLock<Result<String, DomainError>>>,
    last_endpoint: Arc<RwLock<Option<RegistryEndpoint>>>,
    call_count: Arc<AtomicU64>,
    delay: Option<Duration>,
}

impl MockRegistryClient {
    pub fn new(body: String) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(body))),
            last_endpoint: Arc::new(RwLock::new(None)),
            call_count: Arc::new(AtomicU64::new(0)),
            delay: None,
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(error))),
            ..Self::new(String::new())
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_body(&self, body: String) {
        *self.response.write().await = Ok(body);
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.response.write().await = Err(error);
    }

    pub async fn last_endpoint(&self) -> Option<RegistryEndpoint> {
        self.last_endpoint.read().await.clone()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    async fn fetch_snapshot(&self, endpoint: &RegistryEndpoint) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_endpoint.write().await = Some(endpoint.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.response.read().await.clone()
    }
}

// ============================================================================
// Manual Clock
// ============================================================================

pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn registry_config() -> RegistryConfig {
    RegistryConfig {
        server: Some("127.0.0.1:8336".to_string()),
        username: "rpcuser".to_string(),
        password: "rpcpass".to_string(),
        ..Default::default()
    }
}

/// A `name_scan` response body holding the given (name, value) records.
pub fn scan_body(records: &[(&str, &str)]) -> String {
    let result: Vec<_> = records
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    json!({ "result": result, "error": null, "id": 1 }).to_string()
}

/// A registry value whose bare name points at `address`.
pub fn address_value(address: &str) -> String {
    json!({ "map": { "": address } }).to_string()
}
