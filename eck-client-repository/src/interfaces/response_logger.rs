//! Logging collaborator trait definition.

use crate::errors::ClientError;
use eck_client_shared::ApiResponse;

/// Sink for request outcomes.
///
/// Both methods are fire-and-forget; failures inside a logger are not
/// reported back to the client.
pub trait ResponseLogger: Send + Sync {
    /// Record a failed request.
    fn error(&self, error: &ClientError);

    /// Record a successful request.
    fn info(&self, response: &ApiResponse);
}
