//! Process-wide client handle.
//!
//! The binary builds one client at startup and stores it here; it lives for
//! the rest of the process and is never torn down.

use std::sync::OnceLock;

use eck_client_repository::SearchClient;

use crate::AppError;

static GLOBAL_CLIENT: OnceLock<SearchClient> = OnceLock::new();

/// Store the client as the process-wide handle.
///
/// # Returns
///
/// * `Ok(&'static SearchClient)` - The stored handle
/// * `Err(AppError)` - If a handle was already stored
pub fn init(client: SearchClient) -> Result<&'static SearchClient, AppError> {
    GLOBAL_CLIENT
        .set(client)
        .map_err(|_| AppError::config("search client already initialized"))?;

    GLOBAL_CLIENT
        .get()
        .ok_or_else(|| AppError::config("search client not initialized"))
}

/// The process-wide handle, if `init` has run.
pub fn client() -> Option<&'static SearchClient> {
    GLOBAL_CLIENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eck_client_repository::{ConnectionConfig, MockTransport};
    use std::sync::Arc;

    fn mock_client() -> SearchClient {
        let config = ConnectionConfig::new("https://localhost:9200/", "elastic", "changeme")
            .with_transport(Arc::new(MockTransport::new()));
        SearchClient::new(config).unwrap()
    }

    // Single test: the handle is shared by every test in this binary.
    #[test]
    fn test_init_once() {
        let stored = init(mock_client()).unwrap();
        assert_eq!(stored.node().as_str(), "https://localhost:9200/");

        let current = client().unwrap();
        assert!(std::ptr::eq(stored, current));

        assert!(matches!(
            init(mock_client()),
            Err(AppError::ConfigError(_))
        ));
    }
}
