//! OpenSearch implementation of the transport.
//!
//! This module provides the network transport used when no override is
//! configured, built on the OpenSearch Rust client.

mod transport;

pub use transport::OpenSearchTransport;
