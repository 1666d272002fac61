//! Settings read from the environment.

use std::env;
use std::path::PathBuf;

use eck_client_repository::SecretString;

use crate::AppError;

/// Default node URL.
const DEFAULT_ELASTICSEARCH_URL: &str = "https://localhost:9200/";

/// Default basic auth username.
const DEFAULT_ELASTICSEARCH_USERNAME: &str = "elastic";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything but `json` is pretty.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// Read `LOG_FORMAT` from the environment.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// Startup settings for the client.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Node URL.
    pub node: String,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: SecretString,
    /// Path to a PEM CA bundle for certificate validation.
    pub ca_cert_path: Option<PathBuf>,
    /// Substitute the mock transport for the network.
    pub use_mock: bool,
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_URL`: node URL (default: https://localhost:9200/)
    /// - `ELASTICSEARCH_USERNAME`: username (default: elastic)
    /// - `ELASTICSEARCH_PASSWORD`: password (required)
    /// - `ELASTICSEARCH_CA_CERT`: path to a PEM CA bundle (optional)
    /// - `ELASTICSEARCH_MOCK`: `true` or `1` to use the mock transport
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Settings with defaults applied
    /// * `Err(AppError)` - If the password is missing or empty
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let node = non_empty("ELASTICSEARCH_URL")
            .unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string());
        let username = non_empty("ELASTICSEARCH_USERNAME")
            .unwrap_or_else(|| DEFAULT_ELASTICSEARCH_USERNAME.to_string());
        let password = non_empty("ELASTICSEARCH_PASSWORD")
            .map(SecretString::from)
            .ok_or_else(|| AppError::config("ELASTICSEARCH_PASSWORD must be set"))?;
        let ca_cert_path = non_empty("ELASTICSEARCH_CA_CERT").map(PathBuf::from);
        let use_mock = non_empty("ELASTICSEARCH_MOCK")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            node,
            username,
            password,
            ca_cert_path,
            use_mock,
        })
    }
}
