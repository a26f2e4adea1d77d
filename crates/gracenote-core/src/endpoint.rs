//! Service endpoint derivation.

/// Host suffix shared by every client's service endpoint
pub const HOST_SUFFIX: &str = ".web.cddbp.net";

/// Path of the XML API on every endpoint
pub const API_PATH: &str = "webapi/xml/1.0";

/// URL of the XML API for one client identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint {
    url: String,
}

impl ServiceEndpoint {
    /// Derive the endpoint for a client identifier.
    ///
    /// The identifier is not validated; a malformed one yields a URL the
    /// transport later fails to reach.
    #[must_use]
    pub fn resolve(client_id: &str) -> Self {
        Self {
            url: format!("https://c{client_id}{HOST_SUFFIX}/{API_PATH}"),
        }
    }

    /// Use a fixed URL instead of the derived one (stub servers, proxies)
    #[must_use]
    pub fn custom(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Full URL
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Host portion of the URL, port included when present
    #[must_use]
    pub fn host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }
}

impl std::fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for ServiceEndpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
