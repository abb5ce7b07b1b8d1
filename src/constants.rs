//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted request body size (lesson content can be long)
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Length of the opaque refresh token handed to clients
pub const REFRESH_TOKEN_LENGTH: usize = 48;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Display name maximum length
pub const MAX_NAME_LENGTH: u64 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const LEARNER: &str = "learner";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, LEARNER];
}

// =============================================================================
// QUIZ SETTINGS
// =============================================================================

/// Points awarded for every correctly answered question
pub const POINTS_PER_CORRECT_ANSWER: i64 = 10;

/// Largest magnitude accepted for a single topic score. Keeps per-player
/// totals far away from `i64` overflow.
pub const MAX_ABS_SCORE: i64 = 1_000_000_000;

/// Minimum number of choices for a quiz question
pub const MIN_QUESTION_CHOICES: usize = 2;

/// Maximum number of choices for a quiz question
pub const MAX_QUESTION_CHOICES: usize = 6;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration (fixed window per client IP)
pub mod rate_limits {
    /// Auth endpoints - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoints - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Score and quiz submissions - max requests
    pub const SCORE_MAX_REQUESTS: i64 = 20;
    /// Score and quiz submissions - window in seconds
    pub const SCORE_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum topic title length
pub const MAX_TOPIC_TITLE_LENGTH: u64 = 200;

/// Maximum story title length
pub const MAX_STORY_TITLE_LENGTH: u64 = 200;

/// Maximum length of a short description or summary
pub const MAX_SUMMARY_LENGTH: u64 = 1000;

/// Maximum lesson or story body length
pub const MAX_CONTENT_LENGTH: u64 = 200_000;

/// Maximum question text length
pub const MAX_QUESTION_LENGTH: u64 = 2000;

/// Maximum length of a single answer choice
pub const MAX_CHOICE_LENGTH: usize = 500;
