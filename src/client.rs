/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Client for the Zencare healthcare API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Login and token persistence through a pluggable token store
//! - Bearer token attachment on every outgoing request
//! - Typed request and response payloads
//!
//! # Example
//! ```ignore
//! use zencare_client::client::ZencareClient;
//! use zencare_client::config::Config;
//! use zencare_client::interfaces::{AppointmentService, DirectoryService};
//!
//! let config = Config::new();
//! let client = ZencareClient::new(config);
//!
//! client.login("ana@example.com", "secret").await?;
//! let doctors = client.get_doctors(None).await?;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::interfaces::{AppointmentService, DirectoryService};
use crate::model::requests::{AppointmentRequest, RegistrationRequest};
use crate::model::responses::{
    Appointment, Doctor, LoginResponse, PasswordResetResponse, Prescription,
    RegistrationResponse, UserProfile,
};
use crate::storage::{FileTokenStore, TokenStore};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Zencare API
///
/// Holds one HTTP client, the configuration and the token store. All
/// authenticated operations flow through a single request path that attaches
/// the bearer token when one is present in the store.
pub struct ZencareClient {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl ZencareClient {
    /// Creates a new client with a file-backed token store
    ///
    /// The store file path comes from the configuration. Use
    /// [`ZencareClient::with_store`] to inject a different store.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_file));
        Self::with_store(config, store)
    }

    /// Creates a new client with an injected token store
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `store` - Token store shared with the authentication layer
    pub fn with_store(config: Config, store: Arc<dyn TokenStore>) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), store));

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Authenticates and persists the access token for subsequent requests
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Account password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        self.auth.login(email, password).await
    }

    /// Creates an account; no token is persisted
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, AppError> {
        self.auth.register(request).await
    }

    /// Requests a password reset email for the given address
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<PasswordResetResponse, AppError> {
        self.auth.request_password_reset(email).await
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Makes a GET request to the Zencare API
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/profile/")
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request to the Zencare API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PATCH request to the Zencare API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a request against the configured base URL
    ///
    /// This is the single path every operation goes through; the bearer
    /// token from the store is attached here and nowhere else.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path
    /// * `body` - Optional request body
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails; non-2xx responses other
    ///   than 401/404 carry the server's body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.request_internal(method, path, &body).await?;
        self.parse_response(response).await
    }

    /// Internal method to make HTTP requests
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        // Build URL
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        };

        debug!("{} {}", method, url);

        // Build request
        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        // Add authentication header
        request = self.add_auth_headers(request);

        // Add body if present
        if let Some(b) = body {
            request = request.json(b);
        }

        // Send request
        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body_text);
            return Err(AppError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            let body_text = response.text().await.unwrap_or_default();
            error!("Not found: {}", body_text);
            return Err(AppError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected { status, body });
        }

        Ok(response)
    }

    /// Adds the bearer token header when a token is persisted in the store
    fn add_auth_headers(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => {
                debug!("No access token in store, sending unauthenticated request");
                request
            }
        }
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }
}

impl Default for ZencareClient {
    fn default() -> Self {
        let config = Config::default();
        Self::new(config)
    }
}

#[async_trait]
impl AppointmentService for ZencareClient {
    async fn book(&self, request: &AppointmentRequest) -> Result<Appointment, AppError> {
        debug!("Booking appointment with doctor {}", request.doctor);
        self.request(Method::POST, "/appointment/create/", Some(request))
            .await
    }

    async fn get_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.request(Method::GET, "/appointment/", None::<()>).await
    }

    async fn get_appointment(&self, id: u32) -> Result<Appointment, AppError> {
        self.request(Method::GET, &format!("/appointment/{}/", id), None::<()>)
            .await
    }

    async fn cancel_appointment(&self, id: u32) -> Result<Appointment, AppError> {
        debug!("Cancelling appointment {}", id);
        let body = serde_json::json!({ "status": "cancelled" });
        self.request(Method::PATCH, &format!("/appointment/{}/", id), Some(body))
            .await
    }

    async fn get_pending_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.request(Method::GET, "/appointment/pending/", None::<()>)
            .await
    }

    async fn get_prescriptions(&self) -> Result<Vec<Prescription>, AppError> {
        self.request(Method::GET, "/appointment/prescriptions/", None::<()>)
            .await
    }
}

#[async_trait]
impl DirectoryService for ZencareClient {
    async fn get_doctors(&self, profession: Option<&str>) -> Result<Vec<Doctor>, AppError> {
        let path = match profession {
            Some(p) => format!("/doctors/?profession={}", p),
            None => String::from("/doctors/"),
        };
        self.request(Method::GET, &path, None::<()>).await
    }

    async fn get_profile(&self) -> Result<UserProfile, AppError> {
        self.request(Method::GET, "/profile/", None::<()>).await
    }
}
