//! Request description and header construction

use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::Value;

/// HTTP methods used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A request as the caller describes it, before URL and headers are resolved
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    /// Absolute URL (`http...`) or a path relative to the base URL
    pub path: String,

    /// Explicit method. A request with a JSON payload defaults to POST.
    pub method: Option<Method>,

    /// JSON payload
    pub json: Option<Value>,

    /// Attach `Authorization: Bearer <token>` when a token is available
    pub auth: bool,

    /// Token to use instead of the client's session token
    pub token: Option<String>,

    /// Extra headers, applied after (and overriding) the defaults
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path).method(Method::Get)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).method(Method::Post)
    }

    /// Set the method explicitly
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Attach a JSON payload
    pub fn json_value(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Serialize and attach a JSON payload
    pub fn json<T: Serialize>(self, body: &T) -> ApiResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        Ok(self.json_value(value))
    }

    /// Request bearer authentication
    pub fn with_auth(mut self) -> Self {
        self.auth = true;
        self
    }

    /// Use a specific token (implies auth)
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.auth = true;
        self.token = Some(token.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Method that will actually be sent
    pub fn effective_method(&self) -> Method {
        match (self.method, &self.json) {
            (Some(m), _) => m,
            (None, Some(_)) => Method::Post,
            (None, None) => Method::Get,
        }
    }

    /// Build the header list
    ///
    /// `fallback_token` is the session token of the client; the request's own
    /// token wins when both are present.
    pub fn build_headers(&self, fallback_token: Option<&str>) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        if self.json.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        if self.auth {
            let token = self
                .token
                .as_deref()
                .filter(|t| !t.is_empty())
                .or(fallback_token.filter(|t| !t.is_empty()));
            if let Some(token) = token {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        for (name, value) in &self.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }

        headers
    }

    /// Serialized body
    pub fn body(&self) -> Option<String> {
        self.json.as_ref().map(|v| v.to_string())
    }
}

/// Join a path onto the base URL unless it is already absolute
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_get_headers_without_payload() {
        let headers = ApiRequest::get("/api/auth/status").build_headers(None);
        assert_eq!(header(&headers, "Accept"), Some("application/json"));
        assert!(header(&headers, "Content-Type").is_none());
        assert!(header(&headers, "Authorization").is_none());
    }

    #[test]
    fn test_payload_sets_content_type_and_post() {
        let req = ApiRequest::new("/api/users/connect").json_value(json!({ "a": 1 }));
        assert_eq!(req.effective_method(), Method::Post);

        let headers = req.build_headers(None);
        assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
        assert_eq!(req.body().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_auth_uses_session_token_fallback() {
        let headers = ApiRequest::get("/x").with_auth().build_headers(Some("session"));
        assert_eq!(header(&headers, "Authorization"), Some("Bearer session"));

        let headers = ApiRequest::get("/x").token("explicit").build_headers(Some("session"));
        assert_eq!(header(&headers, "Authorization"), Some("Bearer explicit"));
    }

    #[test]
    fn test_auth_without_any_token_sends_no_header() {
        let headers = ApiRequest::get("/x").with_auth().build_headers(None);
        assert!(header(&headers, "Authorization").is_none());

        let headers = ApiRequest::get("/x").with_auth().build_headers(Some(""));
        assert!(header(&headers, "Authorization").is_none());
    }

    #[test]
    fn test_token_ignored_without_auth_flag() {
        let headers = ApiRequest::get("/x").build_headers(Some("session"));
        assert!(header(&headers, "Authorization").is_none());
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let headers = ApiRequest::get("/x")
            .header("accept", "text/plain")
            .header("X-Trace", "1")
            .build_headers(None);
        assert_eq!(header(&headers, "Accept"), Some("text/plain"));
        assert_eq!(header(&headers, "X-Trace"), Some("1"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://localhost:3001", "/api/users"),
            "http://localhost:3001/api/users"
        );
        assert_eq!(
            resolve_url("http://localhost:3001/", "/api/users"),
            "http://localhost:3001/api/users"
        );
        assert_eq!(
            resolve_url("http://localhost:3001", "https://other.host/api"),
            "https://other.host/api"
        );
    }
}
