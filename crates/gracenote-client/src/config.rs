//! Client configuration types.

use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP settings for the identity client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request deadline; expiry surfaces as a transport error
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Fixed URL used instead of the endpoint derived from the client identifier
    pub endpoint: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            endpoint: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Send every request to a fixed URL
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }
}

fn default_user_agent() -> String {
    format!("gracenote-rust/{}", env!("CARGO_PKG_VERSION"))
}
