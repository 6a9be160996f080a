//! Pre-flight checks on the credential model

use crate::credentials::{GrantType, OAuth2Client};
use crate::error::{Error, Result};

/// Reject credentials the token endpoint would refuse anyway.
///
/// Pure check, no network access. The first failing rule is reported.
pub fn validate(client: &OAuth2Client) -> Result<()> {
    if client.scopes.is_empty() {
        return Err(Error::Configuration(
            "At least one scope must be provided".into(),
        ));
    }
    if client.client_id.is_empty() {
        return Err(Error::Configuration("Client ID is required".into()));
    }
    if client.client_secret.is_empty() {
        return Err(Error::Configuration("Client secret is required".into()));
    }
    if client.grant_type == GrantType::AuthorizationCode && client.user_credentials().is_none() {
        return Err(missing_user_credentials());
    }
    Ok(())
}

pub(crate) fn missing_user_credentials() -> Error {
    Error::Configuration(
        "Username and password are required for authorization code grant type".into(),
    )
}
