//! # ECK Client Shared
//!
//! Request and response types shared between the search client, its
//! transports, and the response observers.

mod request;
mod response;

pub use request::{ApiRequest, Method};
pub use response::{ApiResponse, TransportReply};
