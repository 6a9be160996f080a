//! Authorized request executor
//!
//! Every resource call goes through `ESignBaseClient::execute`, which adds
//! the bearer token and handles token expiry: an exact 401 on the first
//! attempt triggers one `connect` on the same credential and one replay of
//! the request. Whatever the replay returns is handed back unchanged.

use esignbase_auth::OAuth2Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use crate::client::ESignBaseClient;
use crate::error::{Error, Result};
use crate::metrics::{self, ReauthOutcome};

/// Per-call request parts: extra headers, query string, JSON body, streaming.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
    /// Streamed responses skip the total request timeout; the client's
    /// connect/read timeouts still apply.
    pub stream: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| Error::InvalidHeader(format!("access token: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

impl ESignBaseClient {
    /// Send an authorized request to `path` (relative to the base URL).
    ///
    /// Fails with `NotConnected` before any network activity when the
    /// credential has no token. A caller-supplied `Authorization` header is
    /// kept on the first attempt. A failed reauthentication is logged and
    /// otherwise ignored, so the replay runs with whatever token is cached.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn execute(
        &self,
        credential: &mut OAuth2Client,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        let Some(token) = credential.access_token() else {
            return Err(Error::NotConnected);
        };
        let mut headers = options.headers.clone();
        if !headers.contains_key(AUTHORIZATION) {
            headers.insert(AUTHORIZATION, bearer(token)?);
        }
        let url = self.config.url_for(path);

        let response = self.send(&method, &url, &headers, &options).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        drop(response);

        debug!("received 401, reauthenticating once");
        match esignbase_auth::connect(&self.http, &self.config, credential).await {
            Ok(()) => metrics::record_reauthentication(ReauthOutcome::Success),
            Err(e) => {
                warn!(error = %e, "reauthentication failed, replaying with cached token");
                metrics::record_reauthentication(ReauthOutcome::Failure);
            }
        }

        if let Some(token) = credential.access_token() {
            headers.insert(AUTHORIZATION, bearer(token)?);
        }
        self.send(&method, &url, &headers, &options).await
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        headers: &HeaderMap,
        options: &RequestOptions,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .headers(headers.clone());
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.json {
            request = request.json(body);
        }
        if !options.stream {
            request = request.timeout(self.config.timeout());
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(format!("request to {url} timed out: {e}"))
            } else {
                Error::Http(format!("request to {url} failed: {e}"))
            }
        })
    }
}
