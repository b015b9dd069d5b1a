//! Storage module for Barter
//!
//! - `json`: JSON - 설정 및 세션 파일 저장/로드

mod json;

// JSON Storage (범용)
pub use json::JsonStore;
