// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of env var names and defaults used across the client

// Server Endpoint Configuration
pub const AUTOBYTEUS_SERVER_URL: &str = "AUTOBYTEUS_SERVER_URL";

// HTTP Client Configuration
pub const AUTOBYTEUS_CONNECT_TIMEOUT_SECS: &str = "AUTOBYTEUS_CONNECT_TIMEOUT_SECS";

/// Catalog endpoint used when `AUTOBYTEUS_SERVER_URL` is not set
pub const DEFAULT_SERVER_URL: &str = "https://localhost:8000";

/// Connection timeout used when `AUTOBYTEUS_CONNECT_TIMEOUT_SECS` is not set
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
