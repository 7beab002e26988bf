//! `QueryClient` against a local mock `/query` backend.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use mongomuse::BackendError;
use mongomuse::backend::{Endpoint, QueryBackend, QueryClient};
use serde_json::{Value, json};

type Captured = Arc<Mutex<Vec<Value>>>;

/// Spawn a mock backend that records request bodies and answers with
/// `status` and the raw `body`.
async fn spawn_backend(status: StatusCode, body: &'static str) -> (Endpoint, Captured) {
    let captured: Captured = Arc::default();

    let app = Router::new()
        .route(
            "/query",
            post(
                move |State(seen): State<Captured>, Json(req): Json<Value>| async move {
                    seen.lock().unwrap().push(req);
                    (status, [("content-type", "application/json")], body).into_response()
                },
            ),
        )
        .with_state(Arc::clone(&captured));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Endpoint::new("127.0.0.1", port), captured)
}

/// A port with nothing listening on it.
async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[tokio::test]
async fn test_query_returns_response_field() {
    let (endpoint, captured) = spawn_backend(StatusCode::OK, r#"{"response":"Status: healthy"}"#).await;
    let client = QueryClient::new(&endpoint).unwrap();

    let reply = client.query("check the status of testbedmongo?").await.unwrap();

    assert_eq!(reply.response.as_deref(), Some("Status: healthy"));
    assert_eq!(
        captured.lock().unwrap().as_slice(),
        &[json!({"query": "check the status of testbedmongo?"})]
    );
}

#[tokio::test]
async fn test_query_without_response_field() {
    let (endpoint, _) = spawn_backend(StatusCode::OK, "{}").await;
    let client = QueryClient::new(&endpoint).unwrap();

    let reply = client.query("hi").await.unwrap();
    assert_eq!(reply.response, None);
}

#[tokio::test]
async fn test_non_string_response_is_unusable() {
    let (endpoint, _) = spawn_backend(StatusCode::OK, r#"{"response": 42}"#).await;
    let client = QueryClient::new(&endpoint).unwrap();

    let reply = client.query("hi").await.unwrap();
    assert_eq!(reply.response, None);
}

#[tokio::test]
async fn test_error_status_body_still_used() {
    let (endpoint, _) = spawn_backend(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"response":"backend exploded"}"#,
    )
    .await;
    let client = QueryClient::new(&endpoint).unwrap();

    let reply = client.query("hi").await.unwrap();
    assert_eq!(reply.response.as_deref(), Some("backend exploded"));
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let (endpoint, _) = spawn_backend(StatusCode::OK, "<html>nope</html>").await;
    let client = QueryClient::new(&endpoint).unwrap();

    let err = client.query("hi").await.unwrap_err();
    assert!(matches!(err, BackendError::Json(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() {
    let endpoint = Endpoint::new("127.0.0.1", closed_port().await);
    let client = QueryClient::new(&endpoint).unwrap();

    let err = client.query("hi").await.unwrap_err();
    assert!(matches!(err, BackendError::Http(_)));
}

#[test]
fn test_invalid_endpoint() {
    let err = QueryClient::new(&Endpoint::new("bad host", 3000)).unwrap_err();
    assert!(matches!(err, BackendError::InvalidEndpoint(_)));
}
