use thiserror::Error;

/// Result type alias for Gracenote operations
pub type Result<T> = std::result::Result<T, GracenoteError>;

/// Boxed cause carried by transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when talking to the Gracenote identity endpoint
#[derive(Error, Debug)]
pub enum GracenoteError {
    /// Request envelope could not be serialized
    #[error("failed to encode request envelope: {0}")]
    Encode(String),

    /// Network-level failure: connection refused, timeout, DNS failure
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// Service answered with an HTTP status other than 200
    #[error("unexpected HTTP status {status}, only 200 is handled")]
    UnexpectedStatus {
        /// HTTP status code received
        status: u16,
    },

    /// Response body is not the expected XML
    #[error("failed to decode response envelope: {message}")]
    Decode {
        /// Parser error description
        message: String,
        /// Raw body as received
        body: Vec<u8>,
    },

    /// Response envelope carried no RESPONSE entries
    #[error("expected a RESPONSE element, but there were none")]
    NoResponse,

    /// Service reported status `ERROR`; holds the envelope message
    #[error("{0}")]
    Service(String),

    /// Service reported a status that is neither `OK` nor `ERROR`
    #[error("unrecognised status: {0}")]
    UnrecognizedStatus(String),

    /// HTTP transport could not be constructed
    #[error("configuration error: {0}")]
    Config(String),
}

impl GracenoteError {
    /// Wrap any error as a transport failure
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Returns true if a caller may reasonably retry the operation.
    ///
    /// Nothing in this crate retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the HTTP status code if the service answered with a non-200 status
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for decode failures
    #[must_use]
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}
