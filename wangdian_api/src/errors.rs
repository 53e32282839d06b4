//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration is unusable (missing credentials, malformed secret or URL).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The remote method name is empty.
    #[error("Invalid method name {0:?}")]
    InvalidMethod(String),
    /// The pager cannot be turned into valid pagination parameters.
    #[error("Invalid pager: {0}")]
    InvalidPager(String),
    /// The request parameters could not be serialized to JSON.
    #[error("Failed to serialize request body")]
    Serialize(#[source] serde_json::Error),
    /// The HTTP request failed before a response was received.
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success HTTP status and no usable envelope.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body is empty, `null`, or not a valid envelope.
    #[error("Invalid response: {reason}")]
    InvalidResponse { reason: String, body: String },
    /// The API returned a non-zero status in its envelope.
    #[error("code: {code}, message: {message}")]
    Remote { code: i64, message: String },
}

impl Error {
    /// Returns true if the error was reported by the remote API itself.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// The remote status code, if this is a [`Error::Remote`].
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Error::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}
