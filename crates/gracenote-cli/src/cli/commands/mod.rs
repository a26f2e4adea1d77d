//! Command implementations.

pub mod config;
pub mod register;
pub mod whoami;

use crate::config::Config;
use crate::output::OutputFormat;
use gracenote::IdentityClient;
use std::path::PathBuf;
use std::time::Duration;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file in use
    pub config_path: PathBuf,

    /// Loaded configuration
    pub config: Config,

    /// Client identifier
    pub client_id: Option<String>,

    /// Client tag
    pub client_tag: Option<String>,

    /// Endpoint override
    pub endpoint: Option<String>,

    /// Request timeout
    pub timeout: Option<Duration>,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Get the client ID, returning an error if not set.
    pub fn require_client_id(&self) -> anyhow::Result<&str> {
        self.client_id.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Client ID required.\n\n\
                 Set it with one of:\n  \
                 1. --client-id <ID>\n  \
                 2. GRACENOTE_CLIENT_ID environment variable\n  \
                 3. gracenote config set client_id <ID>"
            )
        })
    }

    /// Get the client tag, returning an error if not set.
    pub fn require_client_tag(&self) -> anyhow::Result<&str> {
        self.client_tag.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Client tag required.\n\n\
                 Set it with one of:\n  \
                 1. --tag <TAG>\n  \
                 2. GRACENOTE_CLIENT_TAG environment variable\n  \
                 3. gracenote config set client_tag <TAG>"
            )
        })
    }

    /// Create an identity client honouring the endpoint and timeout settings.
    pub fn client(&self) -> anyhow::Result<IdentityClient> {
        let mut builder = IdentityClient::builder();
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint(endpoint.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
