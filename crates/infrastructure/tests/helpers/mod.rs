mod registry_server_mock;

pub use registry_server_mock::{CapturedRequest, MockRegistryServer, MockResponse};
