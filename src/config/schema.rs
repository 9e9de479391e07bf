use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://icy-grass-028f08d00.6.azurestaticapps.net";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";

/// Server configuration as read from the config file.
///
/// Every field is optional; unset fields fall back to the defaults above.
///
/// Example YAML:
/// ```yaml
/// port: 8080
/// bind: "0.0.0.0"
/// allowed_origin: "https://example.com"
/// request_timeout: "30s"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listening port. The `PORT` environment variable overrides it.
    #[serde(default)]
    pub port: Option<u16>,

    /// Address to bind, e.g. "127.0.0.1"
    #[serde(default)]
    pub bind: Option<String>,

    /// The single origin allowed to make cross-origin requests
    #[serde(default)]
    pub allowed_origin: Option<String>,

    /// Per-request timeout in humantime format, e.g. "30s" or "2m"
    #[serde(default)]
    pub request_timeout: Option<String>,
}
