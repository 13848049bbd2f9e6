//! Environment variable utilities
//!
//! Typed lookups with defaults, used by `DomainConfig` and the logger.
//!
//! ```ignore
//! use fsmon_errors_core::env::{env_get, env_get_bool};
//!
//! let trace = env_get_bool("FSMON_ERRORS_TRACE", false);
//! let level: u8 = env_get("FSMON_LOG_LEVEL", 2);
//! ```

use std::str::FromStr;

/// Parse `key` as `T`, falling back to `default` when unset or unparsable.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Boolean flag lookup.
///
/// `1|true|yes|on` → true, `0|false|no|off` → false (case-insensitive).
/// Unset or any other value returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// `Some(T)` if `key` is set and parses, `None` otherwise.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

// ============================================================================
// Tests
// ============================================================================
