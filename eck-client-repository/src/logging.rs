//! Response logging hook.
//!
//! `LoggingObserver` is the observer the binary registers on the client. It
//! forwards errors to `ResponseLogger::error` and successful responses to
//! `ResponseLogger::info`. `TracingLogger` is the default logger and emits
//! `tracing` events.

use tracing::{error, info};

use crate::errors::ClientError;
use crate::interfaces::{ResponseLogger, ResponseObserver, ResponseOutcome};
use eck_client_shared::ApiResponse;

/// Logs request outcomes as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ResponseLogger for TracingLogger {
    fn error(&self, err: &ClientError) {
        match err.status() {
            Some(status) => error!(status = status, error = %err, "Search request failed"),
            None => error!(error = %err, "Search request failed"),
        }
    }

    fn info(&self, response: &ApiResponse) {
        info!(
            request_id = %response.request_id,
            method = %response.method,
            path = %response.path,
            status = response.status,
            body = %response.body,
            "Search response"
        );
    }
}

/// Observer that forwards each outcome to a logger, then continues.
#[derive(Debug, Clone, Default)]
pub struct LoggingObserver<L> {
    logger: L,
}

impl<L: ResponseLogger> LoggingObserver<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<L: ResponseLogger> ResponseObserver for LoggingObserver<L> {
    fn on_response(&self, outcome: ResponseOutcome<'_>) {
        match outcome {
            Err(err) => self.logger.error(err),
            Ok(response) => self.logger.info(response),
        }
    }
}
