//! Connection configuration for the SearchClient.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::interfaces::Transport;
use crate::secret::SecretString;

/// Configuration for the SearchClient.
///
/// Assembled once at startup and moved into the client. Nothing here is
/// validated; a malformed node URL is reported when the client is built, and
/// bad credentials surface as response errors from the server.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Node endpoint, e.g. `https://localhost:9200/`.
    pub node: String,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: SecretString,
    /// PEM encoded CA bundle used to validate the server certificate.
    pub ca_certificate: Option<Vec<u8>>,
    /// Per-request timeout handed to the transport.
    pub request_timeout: Option<Duration>,
    /// Replaces the network transport when set.
    pub transport: Option<Arc<dyn Transport>>,
}

impl ConnectionConfig {
    /// Create a config for the given node and credentials.
    pub fn new(
        node: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Self {
        Self {
            node: node.into(),
            username: username.into(),
            password: password.into(),
            ca_certificate: None,
            request_timeout: None,
            transport: None,
        }
    }

    /// Substitute the network transport, e.g. with a `MockTransport`.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the server certificate against the given PEM bundle.
    pub fn with_ca_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.ca_certificate = Some(pem.into());
        self
    }

    /// Set a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("node", &self.node)
            .field("username", &self.username)
            .field("password", &self.password)
            .field("ca_certificate", &self.ca_certificate.as_ref().map(Vec::len))
            .field("request_timeout", &self.request_timeout)
            .field("transport_override", &self.transport.is_some())
            .finish()
    }
}
