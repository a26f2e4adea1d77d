use serde::{Deserialize, Serialize};

/// Active client identity used by every authenticated request.
///
/// Serializes as the `<AUTH>` block carried by later queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "AUTH")]
pub struct Identity {
    /// Composite `clientID-clientIDTag`
    #[serde(rename = "CLIENT")]
    pub client_id: String,

    /// User identifier, empty until registered or authenticated
    #[serde(rename = "USER", default)]
    pub user_id: String,
}

impl Identity {
    /// Build an identity from the service client identifier, the caller's tag and a user ID
    #[must_use]
    pub fn new(client_id: &str, client_tag: &str, user_id: impl Into<String>) -> Self {
        Self {
            client_id: format!("{client_id}-{client_tag}"),
            user_id: user_id.into(),
        }
    }
}
