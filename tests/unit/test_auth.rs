use reqwest::StatusCode;
use std::sync::Arc;
use zencare_client::client::ZencareClient;
use zencare_client::config::Config;
use zencare_client::error::AppError;
use zencare_client::model::requests::RegistrationRequest;
use zencare_client::storage::{MemoryTokenStore, TokenStore};

const LOGIN_BODY: &str = r#"{
    "refresh": "REFRESH_TOKEN",
    "access": "ACCESS_TOKEN",
    "user_id": 7,
    "email": "ana@example.com",
    "user_type": "patient",
    "is_profile_completed": true
}"#;

fn client_for(server: &mockito::Server, store: Arc<MemoryTokenStore>) -> ZencareClient {
    let config = Config::new().with_base_url(&server.url());
    ZencareClient::with_store(config, store)
}

#[tokio::test]
async fn login_persists_access_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LOGIN_BODY)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store.clone());

    let response = client.login("ana@example.com", "secret").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.access, "ACCESS_TOKEN");
    assert_eq!(response.user_id, 7);
    assert_eq!(response.user_type, "patient");
    assert_eq!(store.get("access_token").as_deref(), Some("ACCESS_TOKEN"));
}

#[tokio::test]
async fn login_sends_credentials_as_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login/")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "email": "ana@example.com",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LOGIN_BODY)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store);

    client.login("ana@example.com", "secret").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn login_failure_keeps_store_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store.clone());

    let err = client.login("ana@example.com", "wrong").await.unwrap_err();

    match err {
        AppError::Unexpected { status, body } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("Unable to log in"));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert!(store.get("access_token").is_none());
}

#[tokio::test]
async fn login_401_maps_to_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login/")
        .with_status(401)
        .with_body(r#"{"detail": "No active account found"}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store);

    let err = client.login("ana@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn register_does_not_persist_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/register/")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "user": {"email": "new@example.com", "first_name": "Nora", "last_name": "Vidal"},
                "refresh": "R",
                "access": "A",
                "is_profile_completed": false
            }"#,
        )
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store.clone());

    let request = RegistrationRequest::new("new@example.com", "secret", "Nora", "Vidal");
    let response = client.register(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.access, "A");
    assert!(!response.is_profile_completed);
    assert_eq!(response.user["email"], "new@example.com");
    // Registration returns tokens but only login persists one
    assert!(store.get("access_token").is_none());
}

#[tokio::test]
async fn register_error_carries_server_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/register/")
        .with_status(400)
        .with_body(r#"{"profession": ["Profession is required for doctors."]}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store);

    let request = RegistrationRequest::new("doc@example.com", "secret", "Eva", "Ruiz")
        .with_user_type("doctor");
    let err = client.register(&request).await.unwrap_err();

    let body = err.response_body().expect("server body should be attached");
    assert!(body.contains("Profession is required"));
}

#[tokio::test]
async fn password_reset_returns_detail() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/password-reset/")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "email": "ana@example.com"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Password reset email has been sent."}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store);

    let response = client.request_password_reset("ana@example.com").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        response.detail.as_deref(),
        Some("Password reset email has been sent.")
    );
}
