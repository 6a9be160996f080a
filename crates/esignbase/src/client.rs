//! Client handle shared by every operation

use common::ClientConfig;
use esignbase_auth::OAuth2Client;
use tracing::debug;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("esignbase-rs/", env!("CARGO_PKG_VERSION"));

/// Connection settings plus the underlying HTTP client.
///
/// Holds no credential state: the bearer token lives on the `OAuth2Client`
/// each call receives, so one `ESignBaseClient` can serve any number of
/// credentials.
#[derive(Debug, Clone)]
pub struct ESignBaseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl ESignBaseClient {
    /// Client for the public deployment with the default 15 s timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client for a custom configuration. The config is validated first.
    ///
    /// Connect and read timeouts are set on the HTTP client so that streamed
    /// downloads, which skip the per-request total timeout, still fail on a
    /// stalled connection.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .build()
            .map_err(|e| Error::Http(format!("building HTTP client: {e}")))?;
        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "client configured");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authenticate `credential` and cache its access token.
    pub async fn connect(&self, credential: &mut OAuth2Client) -> Result<()> {
        esignbase_auth::connect(&self.http, &self.config, credential).await?;
        Ok(())
    }
}
