//! Error types for API operations

/// Errors surfaced by `ESignBaseClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Validation or token-exchange failure from `connect`.
    #[error(transparent)]
    Auth(#[from] esignbase_auth::Error),

    #[error("OAuth2Client is not connected, call connect() first")]
    NotConnected,

    /// Non-success status from a resource endpoint, after the reauthentication retry.
    #[error("{operation} failed ({status}): {body}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request body: {0}")]
    Encode(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Config(#[from] common::Error),
}

impl Error {
    /// HTTP status carried by the error, for API and authentication failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Auth(e) => e.status_code(),
            _ => None,
        }
    }

    /// True for invalid credential models and invalid client configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Auth(esignbase_auth::Error::Configuration(_)) | Error::Config(_)
        )
    }
}

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
