//! Transport trait definition.
//!
//! This module defines the network layer seam of the client, allowing the
//! real OpenSearch transport to be replaced by a mock in tests.

use async_trait::async_trait;

use crate::errors::ClientError;
use eck_client_shared::{ApiRequest, TransportReply};

/// Performs a single request against the search service.
///
/// Implementations return the raw status and body for any HTTP response,
/// including non-2xx ones; interpreting the status is the client's job. An
/// `Err` means no response was obtained at all.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one client can be shared across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and wait for the reply.
    ///
    /// # Arguments
    ///
    /// * `request` - Method, node-relative path, and optional JSON body
    ///
    /// # Returns
    ///
    /// * `Ok(TransportReply)` - The server (or mock) answered
    /// * `Err(ClientError)` - Connection failure, timeout, or unreadable body
    async fn perform(&self, request: &ApiRequest) -> Result<TransportReply, ClientError>;
}
