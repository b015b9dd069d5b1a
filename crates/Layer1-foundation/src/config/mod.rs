//! Config - 통합 설정 관리
//!
//! - `barter.rs` - BarterConfig (API 주소, 출력 옵션)

mod barter;

pub use barter::{
    BarterConfig, DisplayConfig, API_URL_ENV, BARTER_CONFIG_FILE, DEFAULT_API_BASE,
};
