//! Settings and dependency wiring.

mod dependencies;
mod settings;

pub use dependencies::{Dependencies, WRITE_USER_ROLE_MAPPING};
pub use settings::{LogFormat, Settings};
