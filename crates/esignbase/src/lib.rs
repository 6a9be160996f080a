//! eSignBase API client
//!
//! Typed operations for templates, documents and account credits on top of
//! an authorized request executor. The executor injects the cached bearer
//! token and, on a 401, reauthenticates once and replays the request.
//!
//! ```no_run
//! use esignbase::{ESignBaseClient, OAuth2Client, Scope};
//!
//! # async fn run() -> esignbase::Result<()> {
//! let client = ESignBaseClient::new()?;
//! let mut credential = OAuth2Client::client_credentials("id", "secret", [Scope::All]);
//! client.connect(&mut credential).await?;
//! let credits = client.get_credits(&mut credential).await?;
//! println!("{credits}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod download;
pub mod error;
pub mod executor;
pub mod metrics;
pub mod models;
pub mod resources;

#[cfg(test)]
mod test_support;

pub use client::ESignBaseClient;
pub use common::ClientConfig;
pub use download::DocumentDownload;
pub use error::{Error, Result};
pub use esignbase_auth::{GrantType, OAuth2Client, Scope, validate};
pub use executor::RequestOptions;
pub use models::{CreateDocumentRequest, ExpirationDate, MetadataValue, Recipient};
