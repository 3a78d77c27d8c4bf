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

/// Maximum accepted request body (form posts only)
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default wait for a free pooled connection, in seconds
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// `application_name` reported to Postgres (visible in `pg_stat_activity`)
pub const DATABASE_APPLICATION_NAME: &str = "competitions";

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Cookie carrying the session token for browser requests
pub const AUTH_COOKIE_NAME: &str = "token";

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Competition name length bounds
pub const MIN_COMPETITION_NAME_LENGTH: u64 = 3;
pub const MAX_COMPETITION_NAME_LENGTH: u64 = 50;

/// Competition description length bounds
pub const MIN_COMPETITION_DESCRIPTION_LENGTH: u64 = 3;
pub const MAX_COMPETITION_DESCRIPTION_LENGTH: u64 = 1000;

/// Score ("bodovi") bounds, inclusive
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 50.0;

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

/// Messages shown on the error page (Croatian, as rendered to users)
pub mod messages {
    /// Malformed request or missing record
    pub const INVALID_CALL: &str = "Neispravan poziv";
    /// A write did not affect exactly one row
    pub const OPERATION_FAILED: &str = "Operacija nije uspjela";
    /// The user already applied to this competition
    pub const ALREADY_APPLIED: &str = "Već ste prijavljeni!";
}

// =============================================================================
// ROUTES
// =============================================================================

/// Base path of the competitions pages
pub const COMPETITIONS_PATH: &str = "/competitions";
