// ── Runtime client configuration ──
//
// Describes how to reach the Awair cloud: credential data plus
// connection tuning. Never touches disk -- the caller constructs an
// `AwairConfig` and hands it to `Awair::new`.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Configuration for a cloud [`Awair`](crate::Awair) client.
#[derive(Debug, Clone)]
pub struct AwairConfig {
    /// Developer access token for the cloud API.
    pub access_token: SecretString,
    /// Override the cloud endpoint (tests, proxies). `None` uses the
    /// production endpoint.
    pub base_url: Option<Url>,
    /// Request timeout.
    pub timeout: Duration,
}

impl AwairConfig {
    /// Config with default endpoint and timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Point the client at a different host.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
