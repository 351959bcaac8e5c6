use std::fmt;
use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("zenfra-http/", env!("CARGO_PKG_VERSION"));

/// Construction-time configuration for a Zenfra API client.
///
/// Only `endpoint` and `api_token` are required; everything else falls back
/// to a default. The configuration is consumed by
/// [`ZenfraClient::new`](crate::ZenfraClient::new) and cannot be changed
/// afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Zenfra API base URL, e.g. `https://api.zenfra.io`. Trailing slashes
    /// are stripped. Required.
    pub endpoint: String,
    /// Bearer token for authentication. Required.
    pub api_token: String,
    /// Overrides the default `zenfra-http/<version>` User-Agent.
    pub user_agent: Option<String>,
    /// Per-request timeout. Defaults to 30s.
    pub timeout: Option<Duration>,
    /// Maximum number of retries after the initial attempt. Defaults to 3.
    pub max_retries: Option<usize>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
