//! Client configuration
//!
//! The service has a single public deployment, so every field has a default.
//! Embedding applications can still carry an `[esignbase]`-style table in
//! their own TOML and hand it to `ClientConfig::from_toml_str`.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{Error, Result};

/// Public eSignBase deployment. Resource paths already carry the `api/` prefix.
pub const DEFAULT_BASE_URL: &str = "https://app.esignbase.com/";

/// Per-attempt HTTP timeout (token exchange, primary call, retried call).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Endpoint and timeout settings shared by the authenticator and executor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at a different deployment (staging, local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// Missing keys fall back to the defaults, so an empty document yields
    /// `ClientConfig::default()`.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(contents)?;
        config.validate()
    }

    /// Check the fields and normalize `base_url` to end with `/`.
    pub fn validate(mut self) -> Result<Self> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }

        Ok(self)
    }

    /// Per-attempt timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for a resource path; a leading `/` on `path` is ignored.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// OAuth2 token endpoint.
    pub fn token_url(&self) -> String {
        self.url_for("oauth2/token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_deployment() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://app.esignbase.com/");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.token_url(), "https://app.esignbase.com/oauth2/token");
    }

    #[test]
    fn url_for_strips_leading_slash() {
        let config = ClientConfig::default();
        assert_eq!(
            config.url_for("/api/templates"),
            "https://app.esignbase.com/api/templates"
        );
        assert_eq!(
            config.url_for("api/credits"),
            "https://app.esignbase.com/api/credits"
        );
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn toml_overrides_are_applied_and_normalized() {
        let config = ClientConfig::from_toml_str(
            r#"
base_url = "http://127.0.0.1:8080"
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.token_url(), "http://127.0.0.1:8080/oauth2/token");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ClientConfig::with_base_url("ftp://example.com/")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("base_url"), "got: {err}");
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ClientConfig::from_toml_str("timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"), "got: {err}");
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ClientConfig::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)), "got: {err:?}");
    }
}
