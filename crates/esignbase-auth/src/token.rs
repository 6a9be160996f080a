//! OAuth2 token exchange
//!
//! POSTs the client's credentials to `{base_url}oauth2/token` and caches
//! the returned bearer token on the `OAuth2Client`. There is no retry
//! here; the request executor decides when to call back in after a 401.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::ClientConfig;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::credentials::{GrantType, OAuth2Client};
use crate::error::{Error, Result};
use crate::validate::{missing_user_credentials, validate};

/// Token endpoint response. Only `access_token` is used; the rest is logged.
///
/// Every field is optional: a 2xx without `access_token` leaves the client
/// disconnected rather than failing the exchange.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// HTTP Basic credential: base64 of `client_id:client_secret`.
pub fn basic_credential(client: &OAuth2Client) -> String {
    STANDARD.encode(format!(
        "{}:{}",
        client.client_id,
        client.client_secret.expose_str()
    ))
}

/// Token request form fields in wire order.
fn token_form(client: &OAuth2Client) -> Result<Vec<(&'static str, String)>> {
    let mut form = Vec::with_capacity(4);
    if client.grant_type == GrantType::AuthorizationCode {
        let (username, password) = client
            .user_credentials()
            .ok_or_else(missing_user_credentials)?;
        form.push(("username", username.to_owned()));
        form.push(("password", password.to_owned()));
    }
    form.push(("grant_type", client.grant_type.as_str().to_owned()));
    form.push(("scope", client.scope_param()));
    Ok(form)
}

/// Exchange the client's credentials for a bearer token.
///
/// Validation failures are returned before any request is sent. On a
/// non-success status the cached token is left as it was.
#[instrument(skip_all, fields(client_id = %client.client_id, grant_type = %client.grant_type))]
pub async fn connect(
    http: &reqwest::Client,
    config: &ClientConfig,
    client: &mut OAuth2Client,
) -> Result<()> {
    validate(client)?;
    let form = token_form(client)?;

    debug!(scope = %client.scope_param(), "requesting access token");

    let response = http
        .post(config.token_url())
        .header(AUTHORIZATION, format!("Basic {}", basic_credential(client)))
        .form(&form)
        .timeout(config.timeout())
        .send()
        .await
        .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    let token = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::TokenParse(e.to_string()))?;

    if token.access_token.is_none() {
        debug!("token endpoint returned no access_token");
    }
    info!(
        token_type = token.token_type.as_deref().unwrap_or("unknown"),
        expires_in = token.expires_in,
        "connected to eSignBase"
    );
    client.set_access_token(token.access_token);
    Ok(())
}
