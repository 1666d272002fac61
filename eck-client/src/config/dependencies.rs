//! Dependency initialization and wiring for the search client.

use std::fs;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::config::Settings;
use crate::AppError;
use eck_client_repository::{
    ConnectionConfig, LoggingObserver, MockPattern, MockTransport, SearchClient, TracingLogger,
};

/// Role mapping the mock transport answers for.
pub const WRITE_USER_ROLE_MAPPING: &str = "write-user";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The client with the response-logging hook attached.
    pub client: SearchClient,
    /// The mock transport, when it replaced the network.
    pub mock: Option<Arc<MockTransport>>,
}

impl Dependencies {
    /// Build the client described by `settings`.
    ///
    /// Reads the CA bundle from disk if one is configured, substitutes the
    /// mock transport if requested, and subscribes a `LoggingObserver` backed
    /// by `TracingLogger` to the response event.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the CA bundle cannot be read or the client cannot be built
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        info!(
            node = %settings.node,
            username = %settings.username,
            ca_cert = ?settings.ca_cert_path,
            mock = settings.use_mock,
            "Initializing dependencies"
        );

        let mut config = ConnectionConfig::new(settings.node, settings.username, settings.password);

        if let Some(ref path) = settings.ca_cert_path {
            let pem = fs::read(path).map_err(|source| AppError::CaCertificate {
                path: path.clone(),
                source,
            })?;
            config = config.with_ca_certificate(pem);
        }

        let mock = if settings.use_mock {
            let mock = Arc::new(Self::mock_transport());
            config = config.with_transport(mock.clone());
            Some(mock)
        } else {
            None
        };

        let mut client = SearchClient::new(config)?;
        client.on_response(LoggingObserver::new(TracingLogger));

        info!(node = %client.node(), "Search client created");

        Ok(Self { client, mock })
    }

    /// Mock transport with the write-user role mapping registered.
    fn mock_transport() -> MockTransport {
        let mock = MockTransport::new();
        mock.add_json(
            MockPattern::get(format!(
                "/_security/role_mapping/{}",
                WRITE_USER_ROLE_MAPPING
            )),
            json!({ "status": "ok" }),
        );
        mock
    }
}
