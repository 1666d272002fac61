//! Search client implementation.
//!
//! This module provides the client handle application code uses to issue
//! requests against the search service and to subscribe to their outcomes.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;
use uuid::Uuid;

use crate::config::ConnectionConfig;
use crate::errors::ClientError;
use crate::interfaces::{ResponseObserver, Transport};
use crate::opensearch::OpenSearchTransport;
use eck_client_shared::{ApiRequest, ApiResponse};

/// The client handle for the search service.
///
/// Holds the transport chosen at construction and the registered response
/// observers. Observers are added through `&mut self`, so once the handle is
/// shared it is read-only.
pub struct SearchClient {
    transport: Arc<dyn Transport>,
    node: Url,
    username: String,
    observers: Vec<Arc<dyn ResponseObserver>>,
}

impl SearchClient {
    /// Create a client from the given configuration.
    ///
    /// Uses `config.transport` when set, otherwise connects through an
    /// `OpenSearchTransport`.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchClient)` - A client bound to `config.node`
    /// * `Err(ClientError::ConfigurationError)` - If the node URL cannot be parsed
    ///   or the network transport cannot be built
    pub fn new(config: ConnectionConfig) -> Result<Self, ClientError> {
        let node = Url::parse(&config.node).map_err(|e| {
            ClientError::configuration(format!("Invalid node URL '{}': {}", config.node, e))
        })?;

        let transport: Arc<dyn Transport> = match config.transport {
            Some(ref transport) => {
                info!(node = %node, "Using transport override");
                Arc::clone(transport)
            }
            None => Arc::new(OpenSearchTransport::new(node.clone(), &config)?),
        };

        Ok(Self {
            transport,
            node,
            username: config.username,
            observers: Vec::new(),
        })
    }

    /// The node this client is bound to.
    pub fn node(&self) -> &Url {
        &self.node
    }

    /// The username requests authenticate as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Subscribe to the response event.
    ///
    /// The observer is called exactly once for every request issued through
    /// this client, with either the response or the error.
    pub fn on_response<O>(&mut self, observer: O)
    where
        O: ResponseObserver + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    /// Number of registered response observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Issue a request and notify the observers of its outcome.
    ///
    /// A reply with a non-2xx status becomes `ClientError::ResponseError`.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let request_id = Uuid::new_v4();

        let outcome = match self.transport.perform(&request).await {
            Ok(reply) if reply.is_success() => {
                Ok(ApiResponse::from_reply(request_id, &request, reply))
            }
            Ok(reply) => Err(ClientError::response(reply.status, reply.body)),
            Err(e) => Err(e),
        };

        debug!(
            request_id = %request_id,
            success = outcome.is_ok(),
            observers = self.observers.len(),
            "Request completed"
        );

        for observer in &self.observers {
            observer.on_response(outcome.as_ref());
        }

        outcome
    }

    /// Basic information about the cluster (`GET /`).
    pub async fn info(&self) -> Result<ApiResponse, ClientError> {
        self.request(ApiRequest::get("/")).await
    }

    /// Cluster health (`GET /_cluster/health`).
    pub async fn cluster_health(&self) -> Result<ApiResponse, ClientError> {
        self.request(ApiRequest::get("/_cluster/health")).await
    }

    /// Fetch a security role mapping by name.
    pub async fn get_role_mapping(&self, name: &str) -> Result<ApiResponse, ClientError> {
        if name.is_empty() {
            return Err(ClientError::configuration("role mapping name is required"));
        }
        self.request(ApiRequest::get(format!("/_security/role_mapping/{}", name)))
            .await
    }

    /// Run a search query against an index.
    pub async fn search(&self, index: &str, query: Value) -> Result<ApiResponse, ClientError> {
        if index.is_empty() {
            return Err(ClientError::configuration("index is required"));
        }
        self.request(ApiRequest::post(format!("/{}/_search", index)).with_body(query))
            .await
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("node", &self.node.as_str())
            .field("username", &self.username)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::ResponseOutcome;
    use crate::logging::tests::RecordingLogger;
    use crate::logging::LoggingObserver;
    use crate::mock::{MockPattern, MockTransport, MOCK_NOT_FOUND};
    use eck_client_shared::Method;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const NODE: &str = "https://localhost:9200/";

    /// Observer that shares its recorded outcomes with the test body.
    #[derive(Clone, Default)]
    struct SharedRecorder {
        outcomes: Arc<Mutex<Vec<Result<ApiResponse, String>>>>,
    }

    impl ResponseObserver for SharedRecorder {
        fn on_response(&self, outcome: ResponseOutcome<'_>) {
            let recorded = outcome.map(Clone::clone).map_err(ToString::to_string);
            self.outcomes.lock().unwrap().push(recorded);
        }
    }

    fn mock_client(mock: &Arc<MockTransport>) -> SearchClient {
        let config = ConnectionConfig::new(NODE, "elastic", "changeme").with_transport(mock.clone());
        SearchClient::new(config).unwrap()
    }

    #[test]
    fn test_new_binds_node() {
        let mock = Arc::new(MockTransport::new());
        let client = mock_client(&mock);

        assert_eq!(client.node().as_str(), NODE);
        assert_eq!(client.username(), "elastic");
        assert_eq!(client.observer_count(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_node() {
        let config = ConnectionConfig::new("not a url", "elastic", "changeme")
            .with_transport(Arc::new(MockTransport::new()));

        let result = SearchClient::new(config);
        assert!(matches!(result, Err(ClientError::ConfigurationError(_))));
    }

    #[test]
    fn test_new_without_override_builds_network_transport() {
        let config = ConnectionConfig::new("http://localhost:9200", "elastic", "changeme");

        let client = SearchClient::new(config).unwrap();
        assert_eq!(client.node().as_str(), "http://localhost:9200/");
    }

    #[test]
    fn test_debug_omits_credentials() {
        let mock = Arc::new(MockTransport::new());
        let debug = format!("{:?}", mock_client(&mock));

        assert!(debug.contains("https://localhost:9200/"));
        assert!(!debug.contains("changeme"));
    }

    #[tokio::test]
    async fn test_role_mapping_through_mock() {
        let mock = Arc::new(MockTransport::new());
        mock.add_json(
            MockPattern::get("/_security/role_mapping/write-user"),
            json!({"status": "ok"}),
        );

        let mut client = mock_client(&mock);
        let recorder = SharedRecorder::default();
        client.on_response(recorder.clone());

        let response = client.get_role_mapping("write-user").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["status"], "ok");

        let outcomes = recorder.outcomes.lock().unwrap();
        assert_eq!(outcomes.len(), 1);
        let observed = outcomes[0].as_ref().unwrap();
        assert_eq!(observed.body["status"], "ok");
        assert_eq!(observed.request_id, response.request_id);
    }

    #[tokio::test]
    async fn test_unmatched_route_is_response_error() {
        let mock = Arc::new(MockTransport::new());
        let mut client = mock_client(&mock);
        let recorder = SharedRecorder::default();
        client.on_response(recorder.clone());

        let err = client.info().await.unwrap_err();

        match err {
            ClientError::ResponseError { status, ref body } => {
                assert_eq!(status, 404);
                assert_eq!(body["error"], MOCK_NOT_FOUND);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let outcomes = recorder.outcomes.lock().unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_err());
    }

    #[tokio::test]
    async fn test_logging_observer_error_path() {
        let mock = Arc::new(MockTransport::new());
        mock.add(MockPattern::any("/_cluster/health"), |_| {
            Err(ClientError::connection("connection refused"))
        });

        let mut client = mock_client(&mock);
        let observer = Arc::new(LoggingObserver::new(RecordingLogger::default()));
        let hook = Arc::clone(&observer);
        client.on_response(move |outcome: ResponseOutcome<'_>| hook.on_response(outcome));

        assert!(client.cluster_health().await.is_err());

        let errors = observer.logger().errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "Connection error: connection refused");
        assert!(observer.logger().infos.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logging_observer_success_path() {
        let mock = Arc::new(MockTransport::new());
        mock.add_json(MockPattern::get("/"), json!({"cluster_name": "quickstart"}));

        let mut client = mock_client(&mock);
        let observer = Arc::new(LoggingObserver::new(RecordingLogger::default()));
        let hook = Arc::clone(&observer);
        client.on_response(move |outcome: ResponseOutcome<'_>| hook.on_response(outcome));

        client.info().await.unwrap();

        let infos = observer.logger().infos.lock().unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].body["cluster_name"], "quickstart");
        assert!(observer.logger().errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_every_observer_called_once_per_request() {
        let mock = Arc::new(MockTransport::new());
        mock.add_json(MockPattern::get("/"), json!({}));

        let mut client = mock_client(&mock);
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let (a, b) = (Arc::clone(&first), Arc::clone(&second));
        client.on_response(move |_: ResponseOutcome<'_>| {
            a.fetch_add(1, Ordering::SeqCst);
        });
        client.on_response(move |_: ResponseOutcome<'_>| {
            b.fetch_add(1, Ordering::SeqCst);
        });

        client.info().await.unwrap();
        client.info().await.unwrap();
        let _ = client.cluster_health().await;

        assert_eq!(first.load(Ordering::SeqCst), 3);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_search_sends_query_body() {
        let mock = Arc::new(MockTransport::new());
        mock.add_json(
            MockPattern::post("/entities/_search"),
            json!({"hits": {"total": {"value": 0}, "hits": []}}),
        );
        let client = mock_client(&mock);

        let query = json!({"query": {"match": {"name": "geo"}}});
        let response = client.search("entities", query.clone()).await.unwrap();

        assert_eq!(response.body["hits"]["total"]["value"], 0);
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body, Some(query));
    }

    #[tokio::test]
    async fn test_validation_skips_transport_and_observers() {
        let mock = Arc::new(MockTransport::new());
        let mut client = mock_client(&mock);
        let recorder = SharedRecorder::default();
        client.on_response(recorder.clone());

        assert!(client.get_role_mapping("").await.is_err());
        assert!(client.search("", json!({})).await.is_err());

        assert!(mock.requests().is_empty());
        assert!(recorder.outcomes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_reaches_observer() {
        use std::time::Duration;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "green"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = ConnectionConfig::new(server.uri(), "elastic", "changeme")
            .with_request_timeout(Duration::from_millis(200));
        let mut client = SearchClient::new(config).unwrap();
        let recorder = SharedRecorder::default();
        client.on_response(recorder.clone());

        let err = client.cluster_health().await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout(_)));

        let outcomes = recorder.outcomes.lock().unwrap();
        assert_eq!(outcomes.len(), 1);
        let observed = outcomes[0].as_ref().unwrap_err();
        assert!(observed.starts_with("Request timed out"));
    }
}
