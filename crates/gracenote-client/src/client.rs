//! Identity client: registration and authentication.

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use gracenote_core::{
    codec, GracenoteError, Identity, Queries, Query, Responses, Result, ServiceEndpoint, Status,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Gracenote identity endpoint.
///
/// Starts unauthenticated. [`authenticate`](Self::authenticate) or a
/// successful [`register`](Self::register) installs the active [`Identity`];
/// calling either again replaces it. The client holds no locks, so sharing
/// one across threads is up to the caller.
#[derive(Debug)]
pub struct IdentityClient<T = HttpTransport> {
    transport: T,
    endpoint_override: Option<ServiceEndpoint>,
    endpoint: Option<ServiceEndpoint>,
    identity: Option<Identity>,
}

impl IdentityClient<HttpTransport> {
    /// Create a client using default HTTP settings
    pub fn new() -> Result<Self> {
        IdentityClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> IdentityClientBuilder {
        IdentityClientBuilder::new()
    }
}

impl<T: Transport> IdentityClient<T> {
    /// Create a client sending through the given transport
    pub const fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoint_override: None,
            endpoint: None,
            identity: None,
        }
    }

    /// Adopt an identity whose user ID was obtained earlier.
    ///
    /// Purely local: no request is made and inputs are not validated.
    pub fn authenticate(&mut self, client_id: &str, client_tag: &str, user_id: &str) {
        self.endpoint = Some(self.endpoint_for(client_id));
        self.identity = Some(Identity::new(client_id, client_tag, user_id));
    }

    /// Register a new user for `client_id` and return the user ID.
    ///
    /// On success the new identity is committed as if by
    /// [`authenticate`](Self::authenticate). On failure nothing changes.
    pub fn register(&mut self, client_id: &str, client_tag: &str) -> Result<String> {
        let endpoint = self.endpoint_for(client_id);
        let queries = Queries::single(Query::register(client_id));

        debug!("registering client");
        let responses = self.send(&endpoint, &queries)?;
        let user_id = interpret(&responses)?;

        self.authenticate(client_id, client_tag, &user_id);
        debug!("registration succeeded");

        Ok(user_id)
    }

    /// Active identity, if any
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Endpoint of the active identity, if any
    #[must_use]
    pub const fn endpoint(&self) -> Option<&ServiceEndpoint> {
        self.endpoint.as_ref()
    }

    /// Returns true once an identity has been installed
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn endpoint_for(&self, client_id: &str) -> ServiceEndpoint {
        self.endpoint_override
            .clone()
            .unwrap_or_else(|| ServiceEndpoint::resolve(client_id))
    }

    fn send(&self, endpoint: &ServiceEndpoint, queries: &Queries) -> Result<Responses> {
        let body = codec::encode(queries)?;
        let raw = self.transport.post(endpoint, body)?;
        codec::decode(&raw)
    }
}

/// Map the first command result to a user ID or an error
fn interpret(responses: &Responses) -> Result<String> {
    let first = responses.first().ok_or(GracenoteError::NoResponse)?;

    match &first.status {
        Status::Ok => Ok(first.user.clone()),
        Status::Error => Err(GracenoteError::Service(responses.message.clone())),
        other => {
            warn!(status = %other, "unrecognised status from identity endpoint");
            Err(GracenoteError::UnrecognizedStatus(other.as_str().to_string()))
        }
    }
}

/// Builder for configuring an [`IdentityClient`]
#[derive(Debug, Clone, Default)]
pub struct IdentityClientBuilder {
    config: ClientConfig,
}

impl IdentityClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Send every request to a fixed URL (useful for testing)
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.endpoint(url);
        self
    }

    /// Build the client with the reqwest transport
    pub fn build(self) -> Result<IdentityClient> {
        let transport = HttpTransport::new(&self.config)?;
        Ok(self.build_with(transport))
    }

    /// Build the client around a caller-supplied transport.
    ///
    /// Timeout and User-Agent are the transport's business; only the endpoint
    /// override applies.
    pub fn build_with<T: Transport>(self, transport: T) -> IdentityClient<T> {
        let mut client = IdentityClient::with_transport(transport);
        client.endpoint_override = self.config.endpoint.map(ServiceEndpoint::custom);
        client
    }
}
