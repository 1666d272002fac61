//! Response types produced by transports and handed to observers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::request::{ApiRequest, Method};

/// Raw outcome of a transport round trip, before status interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body. `null` when the server sent nothing.
    pub body: Value,
}

impl TransportReply {
    /// Create a reply with the given status and body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Create a `200 OK` reply.
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A successful search API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Identifier assigned to the request by the client.
    pub request_id: Uuid,
    /// Method of the originating request.
    pub method: Method,
    /// Path of the originating request.
    pub path: String,
    /// HTTP status code.
    pub status: u16,
    /// Parsed response body.
    pub body: Value,
    /// When the response was received.
    pub received_at: DateTime<Utc>,
}

impl ApiResponse {
    /// Build a response from the request that produced it and the transport reply.
    pub fn from_reply(request_id: Uuid, request: &ApiRequest, reply: TransportReply) -> Self {
        Self {
            request_id,
            method: request.method,
            path: request.path.clone(),
            status: reply.status,
            body: reply.body,
            received_at: Utc::now(),
        }
    }
}
