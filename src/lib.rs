/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Zencare Client
//!
//! A typed, asynchronous Rust client for the Zencare healthcare API:
//! authentication, appointment booking, doctor directory and profile
//! retrieval over a single configured base URL.
//!
//! After a successful login the access token is persisted through a
//! pluggable [`storage::TokenStore`] and attached as a bearer token to every
//! subsequent request.
//!
//! # Example
//! ```ignore
//! use zencare_client::client::ZencareClient;
//! use zencare_client::config::Config;
//! use zencare_client::interfaces::DirectoryService;
//!
//! let config = Config::new();
//! let client = ZencareClient::new(config);
//!
//! client.login("ana@example.com", "secret").await?;
//! let doctors = client.get_doctors(Some("dentist")).await?;
//! ```

/// Authentication operations and token persistence
pub mod auth;
/// Main API client
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Service traits implemented by the client
pub mod interfaces;
/// Typed request and response payloads
pub mod model;
/// Convenient re-exports of the most used items
pub mod prelude;
/// Token store trait and implementations
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Current version of the crate as defined in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
