//! Mock transport implementation.
//!
//! `MockTransport` answers requests from a table of registered routes instead
//! of the network. It records every request it sees so tests can assert on
//! what the client sent.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::errors::ClientError;
use crate::interfaces::Transport;
use eck_client_shared::{ApiRequest, Method, TransportReply};

/// Body returned for requests no route matches.
pub const MOCK_NOT_FOUND: &str = "Mock not found";

/// Handler producing the reply for a matched request.
pub type MockHandler =
    Arc<dyn Fn(&ApiRequest) -> Result<TransportReply, ClientError> + Send + Sync>;

/// Method and path a route answers to.
///
/// A `None` method matches any method. Path segments equal to `*` match any
/// single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPattern {
    pub method: Option<Method>,
    pub path: String,
}

impl MockPattern {
    /// Match the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            path: path.into(),
        }
    }

    /// Match the path with any method.
    pub fn any(path: impl Into<String>) -> Self {
        Self {
            method: None,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Check whether a request falls under this pattern.
    pub fn matches(&self, request: &ApiRequest) -> bool {
        if let Some(method) = self.method {
            if method != request.method {
                return false;
            }
        }

        let mut expected = self.path.split('/').filter(|s| !s.is_empty());
        let mut actual = request.segments();
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some("*"), Some(_)) => continue,
                (Some(e), Some(a)) if e == a => continue,
                _ => return false,
            }
        }
    }
}

struct MockRoute {
    pattern: MockPattern,
    handler: MockHandler,
}

/// Transport override that serves registered routes from memory.
///
/// Routes can be added after the transport has been handed to a client;
/// share it through an `Arc` and keep a clone for setup and assertions.
///
/// # Example
///
/// ```ignore
/// let mock = Arc::new(MockTransport::new());
/// mock.add_json(
///     MockPattern::get("/_security/role_mapping/write-user"),
///     json!({"status": "ok"}),
/// );
/// let config = ConnectionConfig::new(node, "elastic", password).with_transport(mock.clone());
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: RwLock<Vec<MockRoute>>,
    requests: RwLock<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Later routes take precedence over earlier ones.
    pub fn add<F>(&self, pattern: MockPattern, handler: F)
    where
        F: Fn(&ApiRequest) -> Result<TransportReply, ClientError> + Send + Sync + 'static,
    {
        debug!(method = ?pattern.method, path = %pattern.path, "Registered mock route");
        self.routes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(MockRoute {
                pattern,
                handler: Arc::new(handler),
            });
    }

    /// Register a route that always answers `200 OK` with `body`.
    pub fn add_json(&self, pattern: MockPattern, body: Value) {
        self.add(pattern, move |_| Ok(TransportReply::ok(body.clone())));
    }

    /// Remove every route registered with exactly this pattern.
    pub fn clear(&self, pattern: &MockPattern) {
        self.routes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|route| &route.pattern != pattern);
    }

    /// Remove all routes.
    pub fn clear_all(&self) {
        self.routes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    /// Requests performed so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn find_handler(&self, request: &ApiRequest) -> Option<MockHandler> {
        self.routes
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .rev()
            .find(|route| route.pattern.matches(request))
            .map(|route| Arc::clone(&route.handler))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: &ApiRequest) -> Result<TransportReply, ClientError> {
        self.requests
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        // Handler runs outside the route lock so it may register routes itself.
        match self.find_handler(request) {
            Some(handler) => handler(request),
            None => {
                debug!(method = %request.method, path = %request.path, "No mock route matched");
                Ok(TransportReply::new(404, json!({ "error": MOCK_NOT_FOUND })))
            }
        }
    }
}
