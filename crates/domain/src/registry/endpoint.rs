use std::fmt;

/// Where and as whom the registry daemon is queried.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryEndpoint {
    /// "host:port", already lower-cased
    pub server: String,
    pub username: String,
    pub password: String,
}

impl RegistryEndpoint {
    pub fn new(
        server: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.server)
    }
}

impl fmt::Debug for RegistryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEndpoint")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
