//! Response observer trait definition.

use crate::errors::ClientError;
use eck_client_shared::ApiResponse;

/// Outcome of one request as seen by an observer.
pub type ResponseOutcome<'a> = Result<&'a ApiResponse, &'a ClientError>;

/// Subscriber to the client's response event.
///
/// `on_response` is called exactly once per completed request, in completion
/// order, on the task that issued the request. It has no return value and
/// cannot influence the outcome handed back to the caller.
pub trait ResponseObserver: Send + Sync {
    fn on_response(&self, outcome: ResponseOutcome<'_>);
}

impl<F> ResponseObserver for F
where
    F: Fn(ResponseOutcome<'_>) + Send + Sync,
{
    fn on_response(&self, outcome: ResponseOutcome<'_>) {
        self(outcome)
    }
}
