// ABOUTME: Configuration and environment variable management
// ABOUTME: Env var name constants and typed parsing helpers with defaults

pub mod constants;
pub mod env;

pub use env::{env_or, parse_env_or_default, parse_env_or_default_with_validation};
