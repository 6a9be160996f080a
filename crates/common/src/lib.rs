//! Shared types for the eSignBase client workspace
//!
//! Holds the pieces both the auth crate and the API client need: the
//! redacting `Secret` wrapper, client configuration, and the configuration
//! error type.

mod config;
mod error;
mod secret;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use secret::Secret;
