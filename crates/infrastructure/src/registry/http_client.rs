use async_trait::async_trait;
use bitdns_application::ports::RegistryClient;
use bitdns_domain::{DomainError, RegistryConfig, RegistryEndpoint};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// JSON-RPC request body asking the registry daemon for every registered name.
pub const NAME_SCAN_REQUEST: &str = r#"{"version": "1.1","method": "name_scan","params": [],"id": 1}"#;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Registry client speaking JSON-RPC over plain HTTP with basic auth.
///
/// Each `fetch_snapshot` call is a single POST; there are no retries. The
/// response body must stay below `max_response_bytes`, otherwise the call
/// fails instead of returning a truncated document.
pub struct HttpRegistryClient {
    http: reqwest::Client,
    max_response_bytes: usize,
}

impl HttpRegistryClient {
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(timeout: Option<Duration>, max_response_bytes: usize) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder().user_agent("bitdns/0.1 (name-scan)");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            DomainError::RegistryTransport(format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            max_response_bytes,
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, DomainError> {
        let timeout = (config.request_timeout > 0)
            .then(|| Duration::from_secs(config.request_timeout));

        Self::new(timeout, config.max_response_bytes)
    }

    fn too_large(&self) -> DomainError {
        DomainError::ResponseTooLarge {
            limit: self.max_response_bytes,
        }
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn fetch_snapshot(&self, endpoint: &RegistryEndpoint) -> Result<String, DomainError> {
        if endpoint.server.is_empty() {
            return Err(DomainError::InvalidEndpoint(
                "server address is empty".to_string(),
            ));
        }

        let url = endpoint.url();
        debug!(url = %url, "Sending name_scan request");

        let mut response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .basic_auth(&endpoint.username, Some(&endpoint.password))
            .body(NAME_SCAN_REQUEST)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DomainError::RegistryStatus(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length >= self.max_response_bytes as u64 {
                return Err(self.too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| transport_error(&url, e))?
        {
            if body.len() + chunk.len() >= self.max_response_bytes {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }

        let text = String::from_utf8(body).map_err(|_| {
            DomainError::MalformedResponse("response body is not valid UTF-8".to_string())
        })?;

        if text.contains('\0') {
            return Err(DomainError::MalformedResponse(
                "response body contains a NUL byte".to_string(),
            ));
        }

        debug!(url = %url, response_len = text.len(), "name_scan response received");

        Ok(text)
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::RegistryTransport(format!("request to {} timed out", url))
    } else {
        DomainError::RegistryTransport(format!("request to {} failed: {}", url, e))
    }
}
