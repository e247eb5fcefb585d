//! Centralized default constants for notekeep.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates and the server configuration reference these constants instead of
//! defining their own magic numbers.

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum characters allowed in a note title (after trimming).
///
/// Matches the `VARCHAR(255)` column in the `notes` table.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum characters allowed in note content (after trimming).
///
/// Deployments that want the stricter 500-character limit set
/// `MAX_CONTENT_LENGTH=500`.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default maximum request body size in bytes (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default CORS origin whitelist.
pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Default database URL.
pub const DATABASE_URL: &str = "postgres://localhost/notekeep";

// =============================================================================
// DATABASE POOL
// =============================================================================

/// Default maximum number of pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default number of connections kept open while idle.
pub const DB_MIN_CONNECTIONS: u32 = 1;

/// Default connection acquire timeout in seconds.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle connection timeout in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

/// Default maximum connection lifetime in seconds (30 minutes).
pub const DB_MAX_LIFETIME_SECS: u64 = 1800;
