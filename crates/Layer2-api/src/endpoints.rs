//! Backend REST endpoints

/// Users that have at least one skill offering (GET, bearer)
pub const USERS_WITH_SKILLS: &str = "/api/users?hasSkillOfferings=true";

/// Trade / connection request `{recipientId, skillId}` (POST, bearer)
pub const CONNECT: &str = "/api/users/connect";

/// Create an offering for the current user (POST, bearer)
pub const OFFERINGS: &str = "/api/users/offerings";

/// Session liveness (GET, bearer)
pub const AUTH_STATUS: &str = "/api/auth/status";
