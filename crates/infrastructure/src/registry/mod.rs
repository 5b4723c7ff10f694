pub mod http_client;

pub use http_client::{HttpRegistryClient, NAME_SCAN_REQUEST};
