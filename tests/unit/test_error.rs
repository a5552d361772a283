use reqwest::StatusCode;
use zencare_client::error::AppError;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected {
        status: StatusCode::BAD_REQUEST,
        body: r#"{"error": "slot taken"}"#.to_string(),
    };
    assert!(error.to_string().contains("400"));
    assert!(error.to_string().contains("slot taken"));
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::SerializationError("Invalid format".to_string());
    assert_eq!(error.to_string(), "serialization error: Invalid format");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("Doctor id must be set".to_string());
    assert_eq!(error.to_string(), "invalid input: Doctor id must be set");
}

#[test]
fn test_app_error_display_storage() {
    let error = AppError::StorageError("token store lock poisoned".to_string());
    assert_eq!(error.to_string(), "storage error: token store lock poisoned");
}

#[test]
fn test_app_error_response_body_present() {
    let error = AppError::Unexpected {
        status: StatusCode::BAD_REQUEST,
        body: r#"{"appointment_time": ["already booked"]}"#.to_string(),
    };
    let body = error.response_body().expect("body should be present");
    assert!(body.contains("already booked"));
}

#[test]
fn test_app_error_response_body_absent() {
    assert!(AppError::Unauthorized.response_body().is_none());
    assert!(AppError::NotFound.response_body().is_none());

    let empty = AppError::Unexpected {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: String::new(),
    };
    assert!(empty.response_body().is_none());
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through the mocked client tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(std::error::Error::source(&app_error).is_some());

    assert!(std::error::Error::source(&AppError::Unauthorized).is_none());
}
