//! eSignBase OAuth2 authentication
//!
//! Owns the credential model and the token exchange against
//! `{base_url}oauth2/token`. The API client crate builds its authorized
//! request executor on top of `connect`.
//!
//! Credential flow:
//! 1. Caller builds an `OAuth2Client` (client credentials or authorization code)
//! 2. `validate()` rejects incomplete credentials before any network call
//! 3. `connect()` exchanges the credentials for a bearer token
//! 4. The token is cached on the `OAuth2Client` until the next `connect()`

pub mod credentials;
pub mod error;
pub mod token;
pub mod validate;

pub use credentials::{GrantType, OAuth2Client, Scope};
pub use error::{Error, Result};
pub use token::{TokenResponse, basic_credential, connect};
pub use validate::validate;
