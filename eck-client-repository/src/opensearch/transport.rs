//! OpenSearch transport implementation.
//!
//! This module provides the concrete implementation of `Transport` using the
//! OpenSearch Rust client for connection handling, authentication, and TLS.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::{Certificate, CertificateValidation},
    http::{
        headers::HeaderMap,
        request::JsonBody,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        Method as HttpMethod,
    },
    OpenSearch,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::ClientError;
use crate::interfaces::Transport;
use eck_client_shared::{ApiRequest, Method, TransportReply};

/// Network transport backed by the OpenSearch client.
///
/// # Example
///
/// ```ignore
/// let config = ConnectionConfig::new("https://localhost:9200/", "elastic", password);
/// let node = Url::parse(&config.node)?;
/// let transport = OpenSearchTransport::new(node, &config)?;
/// let reply = transport.perform(&ApiRequest::get("/")).await?;
/// ```
pub struct OpenSearchTransport {
    client: OpenSearch,
    timeout: Option<Duration>,
}

impl OpenSearchTransport {
    /// Create a transport for `node` using the credentials in `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchTransport)` - A transport bound to `node`
    /// * `Err(ClientError::ConfigurationError)` - If the CA bundle is invalid
    pub fn new(node: Url, config: &ConnectionConfig) -> Result<Self, ClientError> {
        let conn_pool = SingleNodeConnectionPool::new(node.clone());
        let mut builder = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(
                config.username.clone(),
                config.password.expose().to_string(),
            ))
            .disable_proxy();

        if let Some(ref pem) = config.ca_certificate {
            let certificate = Certificate::from_pem(pem).map_err(|e| {
                ClientError::configuration(format!("Invalid CA certificate: {}", e))
            })?;
            builder = builder.cert_validation(CertificateValidation::Full(certificate));
        }

        let transport = builder
            .build()
            .map_err(|e| ClientError::configuration(e.to_string()))?;

        info!(
            node = %node,
            username = %config.username,
            custom_ca = config.ca_certificate.is_some(),
            "Created OpenSearch transport"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
            timeout: config.request_timeout,
        })
    }

    fn http_method(method: Method) -> HttpMethod {
        match method {
            Method::Get => HttpMethod::Get,
            Method::Post => HttpMethod::Post,
            Method::Put => HttpMethod::Put,
            Method::Delete => HttpMethod::Delete,
            Method::Head => HttpMethod::Head,
        }
    }

    /// Parse a response body, keeping non-JSON payloads as a JSON string.
    fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}

#[async_trait]
impl Transport for OpenSearchTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn perform(&self, request: &ApiRequest) -> Result<TransportReply, ClientError> {
        let body = request.body.clone().map(JsonBody::new);

        let response = self
            .client
            .send(
                Self::http_method(request.method),
                &request.path,
                HeaderMap::new(),
                None::<&()>,
                body,
                self.timeout,
            )
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::timeout(e.to_string())
                } else {
                    ClientError::connection(e.to_string())
                }
            })?;

        let status = response.status_code().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::serialization(e.to_string()))?;

        debug!(status = status, "Received response");

        Ok(TransportReply::new(status, Self::parse_body(&text)))
    }
}
