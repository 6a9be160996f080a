//! Error types for OAuth authentication operations

/// Errors from credential validation and the token exchange.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential model is incomplete. Raised before any network call.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The token endpoint answered with a non-success status.
    #[error("failed to connect to eSignBase API ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("invalid token response: {0}")]
    TokenParse(String),
}

impl Error {
    /// HTTP status of the token endpoint response, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
