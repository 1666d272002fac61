//! Interface definitions for the search client.
//!
//! The client talks to the network through `Transport` and reports each
//! completed request to its `ResponseObserver`s, which typically forward to a
//! `ResponseLogger`. All three are traits so tests can swap them out.

mod response_logger;
mod response_observer;
mod transport;

pub use response_logger::ResponseLogger;
pub use response_observer::{ResponseObserver, ResponseOutcome};
pub use transport::Transport;
