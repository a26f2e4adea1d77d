//! HTTP transport for request envelopes.

use crate::config::ClientConfig;
use gracenote_core::{GracenoteError, Result, ServiceEndpoint};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Capability to POST an encoded envelope and return the raw 200 response body.
///
/// Implementations map network failures to [`GracenoteError::Transport`] and
/// any status other than 200 to [`GracenoteError::UnexpectedStatus`].
pub trait Transport {
    /// Send `body` to `endpoint` and return the response body
    fn post(&self, endpoint: &ServiceEndpoint, body: Vec<u8>) -> Result<Vec<u8>>;
}

impl<F> Transport for F
where
    F: Fn(&ServiceEndpoint, Vec<u8>) -> Result<Vec<u8>>,
{
    fn post(&self, endpoint: &ServiceEndpoint, body: Vec<u8>) -> Result<Vec<u8>> {
        self(endpoint, body)
    }
}

/// Blocking reqwest transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport honouring the timeout and User-Agent of `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GracenoteError::Config(e.to_string()))?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &ServiceEndpoint, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(bytes = body.len(), "POST request");

        let response = self
            .http
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .map_err(GracenoteError::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "unexpected HTTP status from identity endpoint");
            return Err(GracenoteError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(GracenoteError::transport)?;
        debug!(bytes = bytes.len(), "response received");

        Ok(bytes.to_vec())
    }
}
