//! In-memory transport override for tests.

mod transport;

pub use transport::{MockHandler, MockPattern, MockTransport, MOCK_NOT_FOUND};
