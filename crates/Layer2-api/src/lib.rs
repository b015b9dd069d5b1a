//! # barter-api
//!
//! HTTP client layer for Barter.
//!
//! ## Features
//! - Base URL resolution (absolute URLs pass through)
//! - `Accept` / `Content-Type` / bearer `Authorization` headers
//! - Lenient JSON body parsing (empty or non-JSON bodies yield `None`)
//! - Non-2xx responses become `ApiError::RequestFailed` with the body's `message`
//! - Pluggable [`Transport`] (reqwest in production, recording mock in tests)
//!
//! Single attempt per call: no retry, no timeout, no cancellation.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

// Client
pub use client::ApiClient;
pub use request::{resolve_url, ApiRequest, Method};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

// Error
pub use error::{ApiError, ApiResult};
