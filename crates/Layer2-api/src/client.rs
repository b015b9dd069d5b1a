//! Centralized API client
//!
//! Resolves the URL against the configured base, builds headers, sends one
//! request and turns the response into `Option<Value>` or an [`ApiError`].

use crate::endpoints;
use crate::error::{ApiError, ApiResult};
use crate::request::{resolve_url, ApiRequest};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the barter REST API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session_token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_session_token", &self.session_token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client using `reqwest`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client over any transport
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session_token: None,
        }
    }

    /// Token used for authenticated requests that carry no token of their own
    pub fn with_session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session_token(&self) -> bool {
        self.session_token.is_some()
    }

    /// Resolve a request into what goes over the wire
    pub fn prepare(&self, request: &ApiRequest) -> HttpRequest {
        HttpRequest {
            method: request.effective_method(),
            url: resolve_url(&self.base_url, &request.path),
            headers: request.build_headers(self.session_token.as_deref()),
            body: request.body(),
        }
    }

    /// Send a request
    ///
    /// 2xx returns the parsed body, or `None` when it is empty or not JSON.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        let http = self.prepare(&request);
        debug!("{} {}", http.method, http.url);

        let method = http.method;
        let url = http.url.clone();
        let response = self.transport.execute(http).await?;
        let data = parse_body(&response.body);

        if !response.is_success() {
            let err = ApiError::from_http_status(response.status, data.as_ref());
            warn!("{} {} failed: {} ({})", method, url, err, response.status);
            return Err(err);
        }

        Ok(data)
    }

    /// Send and deserialize a required body
    pub async fn send_as<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let data = self
            .send(request)
            .await?
            .ok_or_else(|| ApiError::InvalidResponse("empty response body".to_string()))?;
        serde_json::from_value(data).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// GET a path
    pub async fn get(&self, path: &str, auth: bool) -> ApiResult<Option<Value>> {
        let mut request = ApiRequest::get(path);
        request.auth = auth;
        self.send(request).await
    }

    /// POST a JSON body to a path
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        auth: bool,
    ) -> ApiResult<Option<Value>> {
        let mut request = ApiRequest::post(path).json(body)?;
        request.auth = auth;
        self.send(request).await
    }

    /// Session liveness check
    ///
    /// Never fails: errors are reported as `{"success": false, "error": ...}`.
    pub async fn status_check(&self) -> Value {
        match self.get(endpoints::AUTH_STATUS, true).await {
            Ok(data) => data.unwrap_or(Value::Null),
            Err(e) => json!({ "success": false, "error": e.to_string() }),
        }
    }
}

/// Parse a response body, tolerating empty and non-JSON bodies
fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn client(mock: MockTransport) -> (ApiClient, Arc<MockTransport>) {
        let mock = Arc::new(mock);
        let client = ApiClient::with_transport("http://localhost:3001", mock.clone())
            .with_session_token(Some("tok".to_string()));
        (client, mock)
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), None);
        assert_eq!(parse_body("  \n"), None);
        assert_eq!(parse_body("<html>oops</html>"), None);
        assert_eq!(parse_body("null"), None);
        assert_eq!(parse_body(r#"{"ok":true}"#), Some(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let (client, mock) = client(MockTransport::new().respond_json(
            Method::Get,
            "/api/auth/status",
            200,
            json!({ "success": true }),
        ));

        let data = client.get("/api/auth/status", true).await.unwrap();
        assert_eq!(data, Some(json!({ "success": true })));

        let sent = &mock.requests()[0];
        assert_eq!(sent.url, "http://localhost:3001/api/auth/status");
        assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
        assert_eq!(sent.header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_success_with_empty_body() {
        let (client, _) = client(MockTransport::new().respond(Method::Post, "/x", 204, ""));
        let data = client.post("/x", &json!({ "a": 1 }), false).await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let (client, _) =
            client(MockTransport::new().respond(Method::Post, "/x", 201, "created, not json"));
        assert!(client.post("/x", &json!({}), true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_uses_body_message() {
        let (client, _) = client(MockTransport::new().respond_json(
            Method::Get,
            "/x",
            401,
            json!({ "message": "Unauthorized" }),
        ));

        let err = client.get("/x", true).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 401,
                message: "Unauthorized".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_2xx_without_json_body() {
        let (client, _) =
            client(MockTransport::new().respond(Method::Get, "/x", 503, "Service Unavailable"));
        let err = client.get("/x", false).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed (503)");
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let (client, mock) = client(MockTransport::new().fail(Method::Get, "/x", "refused"));
        let err = client.get("/x", false).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(mock.total(), 1);
    }

    #[tokio::test]
    async fn test_post_serializes_payload() {
        let (client, mock) =
            client(MockTransport::new().respond_json(Method::Post, "/x", 200, json!({})));

        client
            .post("/x", &json!({ "recipientId": "u1" }), true)
            .await
            .unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(mock.last_json(), Some(json!({ "recipientId": "u1" })));
    }

    #[tokio::test]
    async fn test_status_check_never_fails() {
        let (client, _) = client(MockTransport::new().respond_json(
            Method::Get,
            "/api/auth/status",
            401,
            json!({ "message": "Token expired" }),
        ));

        let status = client.status_check().await;
        assert_eq!(status["success"], json!(false));
        assert_eq!(status["error"], json!("Token expired"));
    }

    #[tokio::test]
    async fn test_send_as_requires_body() {
        let (client, _) = client(MockTransport::new().respond(Method::Get, "/x", 200, ""));
        let err = client
            .send_as::<serde_json::Map<String, Value>>(ApiRequest::get("/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }
}
