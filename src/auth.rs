/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Authentication module for the Zencare API
//!
//! This module handles the unauthenticated entry points:
//! - Login, which persists the returned access token to the token store
//! - Account registration
//! - Password reset requests
//!
//! Everything after login reads the token back from the store; there is no
//! refresh and no logout, the stored token simply gets overwritten by the
//! next successful login.

use crate::config::Config;
use crate::constants::{ACCESS_TOKEN_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegistrationRequest};
use crate::model::responses::{LoginResponse, PasswordResetResponse, RegistrationResponse};
use crate::storage::TokenStore;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Authentication manager for the Zencare API
///
/// Owns its own HTTP client because every operation here runs without a
/// bearer token; authenticated traffic goes through the main client instead.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    store: Arc<dyn TokenStore>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `store` - Token store that receives the access token after login
    pub fn new(config: Arc<Config>, store: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            store,
        }
    }

    /// Returns the access token currently persisted in the token store
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    /// Authenticates against the Zencare API and persists the access token
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Account password
    ///
    /// # Returns
    /// * `Ok(LoginResponse)` - Tokens plus account metadata from the backend
    /// * `Err(AppError)` - If the request fails or credentials are rejected
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let url = format!("{}/auth/login/", self.config.rest_api.base_url);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            if status == StatusCode::UNAUTHORIZED {
                return Err(AppError::Unauthorized);
            }
            return Err(AppError::Unexpected { status, body });
        }

        let json: LoginResponse = response.json().await?;

        self.store.set(ACCESS_TOKEN_KEY, &json.access)?;

        info!("✓ Login successful, user: {}", json.email);
        Ok(json)
    }

    /// Creates an account via the registration endpoint
    ///
    /// The payload is forwarded as-is; validation rules live in the backend.
    /// No token is persisted, callers log in explicitly afterwards.
    ///
    /// # Returns
    /// * `Ok(RegistrationResponse)` - The created user plus initial tokens
    /// * `Err(AppError)` - If the backend rejects the payload
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, AppError> {
        let url = format!("{}/auth/register/", self.config.rest_api.base_url);

        debug!("Sending registration request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Registration failed with status {}: {}", status, body);
            return Err(AppError::Unexpected { status, body });
        }

        let json: RegistrationResponse = response.json().await?;

        info!("✓ Registered user: {}", request.email);
        Ok(json)
    }

    /// Requests a password reset email
    ///
    /// The backend answers 200 whether or not the address is registered, so
    /// a success here only means the request was accepted.
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<PasswordResetResponse, AppError> {
        let url = format!("{}/auth/password-reset/", self.config.rest_api.base_url);

        let body = serde_json::json!({ "email": email });

        debug!("Sending password reset request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Password reset failed with status {}: {}", status, body);
            return Err(AppError::Unexpected { status, body });
        }

        let json: PasswordResetResponse = response.json().await?;

        info!("✓ Password reset requested for: {}", email);
        Ok(json)
    }
}
