// ABOUTME: Environment variable parsing utilities
// ABOUTME: Typed helpers with defaults and range validation for env overrides

use std::str::FromStr;
use tracing::warn;

/// Read a string environment variable, falling back to `default` when unset.
pub fn env_or(var_name: &str, default: &str) -> String {
    std::env::var(var_name).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable into `T`, falling back to `default` when the
/// variable is unset or does not parse.
pub fn parse_env_or_default<T>(var_name: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(var_name)
        .ok()
        .and_then(|raw| raw.parse::<T>().ok())
        .unwrap_or(default)
}

/// Parse an environment variable into `T` and accept the value only if the
/// validator passes. A set-but-unusable value falls back to `default` with a
/// warning; an unset variable falls back silently.
pub fn parse_env_or_default_with_validation<T, F>(var_name: &str, default: T, validator: F) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    F: Fn(T) -> bool,
{
    let raw = match std::env::var(var_name) {
        Ok(raw) => raw,
        Err(_) => return default,
    };

    match raw.parse::<T>() {
        Ok(parsed) if validator(parsed) => parsed,
        Ok(_) => {
            warn!(
                "Environment variable {} has out-of-range value '{}', using default: {}",
                var_name, raw, default
            );
            default
        }
        Err(_) => {
            warn!(
                "Environment variable {} has unparseable value '{}', using default: {}",
                var_name, raw, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_unset() {
        std::env::remove_var("AB_TEST_URL_UNSET");
        assert_eq!(
            env_or("AB_TEST_URL_UNSET", "https://localhost:8000"),
            "https://localhost:8000"
        );
    }

    #[test]
    fn test_env_or_set() {
        std::env::set_var("AB_TEST_URL_SET", "https://models.example.com");
        assert_eq!(
            env_or("AB_TEST_URL_SET", "https://localhost:8000"),
            "https://models.example.com"
        );
        std::env::remove_var("AB_TEST_URL_SET");
    }

    #[test]
    fn test_parse_env_or_default_unset() {
        std::env::remove_var("AB_TEST_TIMEOUT_UNSET");
        let secs: u64 = parse_env_or_default("AB_TEST_TIMEOUT_UNSET", 5);
        assert_eq!(secs, 5);
    }

    #[test]
    fn test_parse_env_or_default_set() {
        std::env::set_var("AB_TEST_TIMEOUT_SET", "30");
        let secs: u64 = parse_env_or_default("AB_TEST_TIMEOUT_SET", 5);
        assert_eq!(secs, 30);
        std::env::remove_var("AB_TEST_TIMEOUT_SET");
    }

    #[test]
    fn test_parse_env_or_default_unparseable() {
        std::env::set_var("AB_TEST_TIMEOUT_BAD", "soon");
        let secs: u64 = parse_env_or_default("AB_TEST_TIMEOUT_BAD", 5);
        assert_eq!(secs, 5);
        std::env::remove_var("AB_TEST_TIMEOUT_BAD");
    }

    #[test]
    fn test_parse_env_with_validation_accepts() {
        std::env::set_var("AB_TEST_TIMEOUT_VALID", "60");
        let secs = parse_env_or_default_with_validation("AB_TEST_TIMEOUT_VALID", 5u64, |v| {
            (1..=120).contains(&v)
        });
        assert_eq!(secs, 60);
        std::env::remove_var("AB_TEST_TIMEOUT_VALID");
    }

    #[test]
    fn test_parse_env_with_validation_rejects() {
        std::env::set_var("AB_TEST_TIMEOUT_RANGE", "0");
        let secs = parse_env_or_default_with_validation("AB_TEST_TIMEOUT_RANGE", 5u64, |v| {
            (1..=120).contains(&v)
        });
        assert_eq!(secs, 5);
        std::env::remove_var("AB_TEST_TIMEOUT_RANGE");
    }
}
