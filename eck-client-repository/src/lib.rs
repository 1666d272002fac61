//! # ECK Client Repository
//!
//! This crate provides the search client handle, the transport and observer
//! interfaces it is wired through, a transport backed by the OpenSearch
//! client, and an in-memory mock transport for tests.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod logging;
pub mod mock;
pub mod opensearch;
pub mod secret;

pub use client::SearchClient;
pub use config::ConnectionConfig;
pub use errors::ClientError;
pub use interfaces::{ResponseLogger, ResponseObserver, ResponseOutcome, Transport};
pub use logging::{LoggingObserver, TracingLogger};
pub use mock::{MockPattern, MockTransport};
pub use self::opensearch::OpenSearchTransport;
pub use secret::SecretString;
