use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Registry server is not configured")]
    RegistryNotConfigured,

    #[error("Invalid registry endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Registry transport error: {0}")]
    RegistryTransport(String),

    #[error("Registry responded with HTTP {0}")]
    RegistryStatus(u16),

    #[error("Registry response exceeds {limit} bytes")]
    ResponseTooLarge { limit: usize },

    #[error("Malformed registry response: {0}")]
    MalformedResponse(String),

    #[error("Malformed registry record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Malformed registry entry: {0}")]
    MalformedEntry(String),
}
