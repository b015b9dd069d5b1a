//! ReqwestTransport against a local HTTP server
//!
//! 실행: cargo test -p barter-api --test http_roundtrip

use axum::extract::{Json, RawQuery};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use barter_api::{endpoints, ApiClient, ApiError};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn status(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer good-token") => (StatusCode::OK, Json(json!({ "success": true }))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        ),
    }
}

async fn connect(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (
        StatusCode::CREATED,
        Json(json!({ "received": body, "contentType": content_type })),
    )
}

async fn users(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({ "users": [], "query": query }))
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/auth/status", get(status))
        .route("/api/users", get(users))
        .route("/api/users/connect", post(connect))
        .route("/plain", get(|| async { "not json" }))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_bearer_token_reaches_server() {
    let base = spawn_server().await;

    let ok = ApiClient::new(&base).with_session_token(Some("good-token".to_string()));
    assert_eq!(ok.status_check().await, json!({ "success": true }));

    let anonymous = ApiClient::new(&base);
    let err = anonymous
        .get(endpoints::AUTH_STATUS, true)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_json_post_round_trip() {
    let base = spawn_server().await;
    let client = ApiClient::new(&base).with_session_token(Some("good-token".to_string()));

    let data = client
        .post(
            endpoints::CONNECT,
            &json!({ "recipientId": "u1", "skillId": "s1" }),
            true,
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(data["received"]["skillId"], "s1");
    assert_eq!(data["contentType"], "application/json");
}

#[tokio::test]
async fn test_query_string_is_preserved() {
    let base = spawn_server().await;
    let client = ApiClient::new(&base);

    let data = client
        .get(endpoints::USERS_WITH_SKILLS, false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(data["query"], "hasSkillOfferings=true");
}

#[tokio::test]
async fn test_non_json_bodies() {
    let base = spawn_server().await;
    let client = ApiClient::new(&base);

    assert!(client.get("/plain", false).await.unwrap().is_none());

    let err = client.get("/broken", false).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed (500)");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}", addr));
    let err = client.get(endpoints::AUTH_STATUS, false).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
