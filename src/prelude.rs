/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # Zencare Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the Zencare client library. By importing this
//! prelude, you get access to everything needed for most interactions with
//! the Zencare API.
//!
//! ## Usage
//!
//! ```rust
//! use zencare_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::new();
//! let client = ZencareClient::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Zencare API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Main API client
pub use crate::client::ZencareClient;

/// Authentication manager
pub use crate::auth::Auth;

// ============================================================================
// SERVICE TRAITS
// ============================================================================

/// Appointment operations trait
pub use crate::interfaces::AppointmentService;

/// Directory and profile lookups trait
pub use crate::interfaces::DirectoryService;

// ============================================================================
// TOKEN STORAGE
// ============================================================================

/// Token store trait and implementations
pub use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Request payloads sent to the API
pub use crate::model::requests::{AppointmentRequest, LoginRequest, RegistrationRequest};

// ============================================================================
// RESPONSE MODELS
// ============================================================================

/// Response payloads returned by the API
pub use crate::model::responses::{
    Appointment, Doctor, LoginResponse, PasswordResetResponse, Prescription,
    RegistrationResponse, UserProfile,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{NaiveDate, NaiveTime};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
