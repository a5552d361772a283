use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_FILE};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Zencare API
pub struct Credentials {
    /// Email address used as the login identifier
    pub email: String,
    /// Password for the Zencare account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Zencare API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Path of the file used by the file-backed token store
    pub token_file: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Zencare REST API, including the /api/v1 mount point
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Loads `.env` first, then reads `ZENCARE_EMAIL`, `ZENCARE_PASSWORD`,
    /// `ZENCARE_BASE_URL`, `ZENCARE_REST_TIMEOUT` and `ZENCARE_TOKEN_FILE`.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("ZENCARE_EMAIL", String::from("default_email"));
        let password = get_env_or_default("ZENCARE_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if email == "default_email" {
            error!("ZENCARE_EMAIL not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("ZENCARE_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { email, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ZENCARE_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("ZENCARE_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            token_file: get_env_or_default("ZENCARE_TOKEN_FILE", String::from(DEFAULT_TOKEN_FILE)),
        }
    }

    /// Replaces the base URL, trimming any trailing slash
    ///
    /// Useful for pointing the client at a local or mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
