use serde::{Deserialize, Serialize};

/// Command name carried in the `CMD` attribute of a query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Command {
    /// Register a new user identity for a client
    Register,
    /// Any other service command, kept verbatim
    Other(String),
}

impl Command {
    /// Wire name of the command
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Register => "REGISTER",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Command {
    fn from(s: String) -> Self {
        match s.as_str() {
            "REGISTER" => Self::Register,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Command> for String {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Register => "REGISTER".to_string(),
            Command::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single command entry of a request envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Command name, serialized as the `CMD` attribute
    #[serde(rename = "@CMD")]
    pub cmd: Command,

    /// Client identifier
    #[serde(rename = "CLIENT", default)]
    pub client_id: String,
}

impl Query {
    /// Create a query for an arbitrary command
    #[must_use]
    pub fn new(cmd: impl Into<Command>, client_id: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            client_id: client_id.into(),
        }
    }

    /// Create a `REGISTER` query for the given client identifier
    #[must_use]
    pub fn register(client_id: impl Into<String>) -> Self {
        Self::new(Command::Register, client_id)
    }
}

/// Request envelope: `<QUERIES><QUERY CMD="..."><CLIENT>...</CLIENT></QUERY>...</QUERIES>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "QUERIES")]
pub struct Queries {
    /// Ordered command entries
    #[serde(rename = "QUERY", default)]
    pub queries: Vec<Query>,
}

impl Queries {
    /// Envelope holding exactly one query
    #[must_use]
    pub fn single(query: Query) -> Self {
        Self {
            queries: vec![query],
        }
    }
}

impl From<Vec<Query>> for Queries {
    fn from(queries: Vec<Query>) -> Self {
        Self { queries }
    }
}

/// Status tag of a command result
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Command succeeded
    Ok,
    /// Command failed; the envelope message explains why
    Error,
    /// Any other service-defined status such as `NO MATCH`
    Other(String),
    /// STATUS attribute absent
    #[default]
    Missing,
}

impl Status {
    /// Wire form of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
            Self::Other(s) => s,
            Self::Missing => "",
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => Self::Ok,
            "ERROR" => Self::Error,
            "" => Self::Missing,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single command result of a response envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Status tag, serialized as the `STATUS` attribute
    #[serde(rename = "@STATUS", default)]
    pub status: Status,

    /// User identifier returned by the service, empty when absent
    #[serde(rename = "USER", default, skip_serializing_if = "String::is_empty")]
    pub user: String,
}

impl Response {
    /// Create a result with the given status and user identifier
    #[must_use]
    pub fn new(status: impl Into<Status>, user: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            user: user.into(),
        }
    }
}

/// Response envelope: `<RESPONSES><MESSAGE>...</MESSAGE><RESPONSE STATUS="...">...</RESPONSE>...</RESPONSES>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "RESPONSES")]
pub struct Responses {
    /// Service message, empty when absent
    #[serde(rename = "MESSAGE", default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Ordered command results
    #[serde(rename = "RESPONSE", default)]
    pub responses: Vec<Response>,
}

impl Responses {
    /// First command result, the only one inspected for single-query requests
    #[must_use]
    pub fn first(&self) -> Option<&Response> {
        self.responses.first()
    }

    /// Returns true if the envelope carries no command results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::from("REGISTER"), Command::Register);
        assert_eq!(Command::from("ALBUM_SEARCH"), Command::Other("ALBUM_SEARCH".into()));
        assert_eq!(String::from(Command::Register), "REGISTER");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(Status::from("OK"), Status::Ok);
        assert_eq!(Status::from("ERROR"), Status::Error);
        assert_eq!(Status::from("NO MATCH"), Status::Other("NO MATCH".into()));
        assert_eq!(Status::from(""), Status::Missing);
        assert_eq!(Status::Other("NO MATCH".into()).to_string(), "NO MATCH");
    }

    #[test]
    fn test_register_query() {
        let q = Query::register("0");
        assert_eq!(q.cmd, Command::Register);
        assert_eq!(q.client_id, "0");
        assert_eq!(Queries::single(q).queries.len(), 1);
    }

    #[test]
    fn test_first_response() {
        let resps = Responses {
            message: String::new(),
            responses: vec![Response::new("OK", "1"), Response::new("ERROR", "")],
        };
        assert_eq!(resps.first().map(|r| r.user.as_str()), Some("1"));
        assert!(Responses::default().is_empty());
    }
}
