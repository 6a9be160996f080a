//! OAuth2 credential model
//!
//! An `OAuth2Client` describes one registered eSignBase client application
//! plus the bearer token obtained for it. Everything except the token is
//! fixed at construction. The token is written only by `token::connect`,
//! which is why its setter is crate-private.

use std::collections::BTreeSet;
use std::fmt;

use common::Secret;

/// OAuth2 grant used for the token exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrantType {
    ClientCredentials,
    /// Resource-owner variant: the request carries `username` and `password`.
    AuthorizationCode,
}

impl GrantType {
    /// Wire value of the `grant_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::ClientCredentials => "client_credentials",
            GrantType::AuthorizationCode => "authorization_code",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission requested for the access token.
///
/// Variant order defines the order of the `scope` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    All,
    Read,
    CreateDocument,
    Delete,
    Sandbox,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Read => "read",
            Scope::CreateDocument => "create_document",
            Scope::Delete => "delete",
            Scope::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered eSignBase client application and its cached bearer token.
///
/// The caller owns the value. Operations that may refresh the token take
/// `&mut OAuth2Client`, so a single instance cannot be shared across
/// concurrent calls without external synchronization.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub grant_type: GrantType,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub scopes: Vec<Scope>,
    access_token: Option<Secret<String>>,
}

impl OAuth2Client {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        grant_type: GrantType,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
            grant_type,
            username: None,
            password: None,
            scopes: scopes.into_iter().collect(),
            access_token: None,
        }
    }

    /// Client-credentials grant: the client authenticates as itself.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Self {
        Self::new(client_id, client_secret, GrantType::ClientCredentials, scopes)
    }

    /// Authorization-code grant on behalf of an eSignBase user.
    pub fn authorization_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Self {
        Self::new(client_id, client_secret, GrantType::AuthorizationCode, scopes)
            .with_user_credentials(username, password)
    }

    pub fn with_user_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(Secret::new(password.into()));
        self
    }

    /// Current bearer token, if `connect` has produced one.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(Secret::expose_str)
    }

    /// True when a non-empty access token is cached.
    pub fn is_connected(&self) -> bool {
        self.access_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Username and password, present only when both are non-empty.
    pub fn user_credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self
            .password
            .as_ref()
            .map(Secret::expose_str)
            .filter(|p| !p.is_empty())?;
        Some((username, password))
    }

    /// `scope` form value: distinct scopes in declaration order, space-joined.
    pub fn scope_param(&self) -> String {
        self.scopes
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .iter()
            .map(Scope::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token.filter(|t| !t.is_empty()).map(Secret::new);
    }
}
