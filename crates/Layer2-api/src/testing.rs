//! Recording transport for tests
//!
//! Routes are matched by method and by the URL ending with the route path
//! (query string included). Unmatched requests get a 404.

use crate::error::{ApiError, ApiResult};
use crate::request::Method;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    path: String,
    reply: ApiResult<HttpResponse>,
}

/// In-memory transport that records every request
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with a status and raw body
    pub fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
        self
    }

    /// Reply with a status and JSON body
    pub fn respond_json(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.respond(method, path, status, &body.to_string())
    }

    /// Fail at the transport level
    pub fn fail(self, method: Method, path: &str, message: &str) -> Self {
        self.push(method, path, Err(ApiError::Network(message.to_string())));
        self
    }

    /// Replace the reply of an existing route (or add it)
    pub fn set_reply(&self, method: Method, path: &str, status: u16, body: Value) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.retain(|r| !(r.method == method && r.path == path));
        }
        self.push(method, path, Ok(HttpResponse::new(status, body.to_string())));
    }

    fn push(&self, method: Method, path: &str, reply: ApiResult<HttpResponse>) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(Route {
                method,
                path: path.to_string(),
                reply,
            });
        }
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests matching method + path
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(path))
            .count()
    }

    pub fn total(&self) -> usize {
        self.requests().len()
    }

    /// Last request body parsed as JSON
    pub fn last_json(&self) -> Option<Value> {
        self.requests()
            .last()
            .and_then(|r| r.body.as_deref())
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let reply = self.routes.lock().ok().and_then(|routes| {
            routes
                .iter()
                .find(|r| r.method == request.method && request.url.ends_with(&r.path))
                .map(|r| r.reply.clone())
        });

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        reply.unwrap_or_else(|| {
            Ok(HttpResponse::new(
                404,
                r#"{"message":"No mock route"}"#,
            ))
        })
    }
}
