//! Domain configuration
//!
//! Compile-time defaults with runtime environment overrides. Read once,
//! before the first domain singleton is built, and never changed after.
//!
//! # Environment Variables
//!
//! - `FSMON_ERRORS_WARN_MISUSE` - Warn when the generic domain is asked for text (0/1)
//! - `FSMON_ERRORS_TRACE` - Trace every equivalence decision (0/1)

use std::sync::OnceLock;

use fsmon_errors_core::env::env_get_bool;

pub mod defaults {
    pub const WARN_ON_MISUSE: bool = true;
    pub const TRACE_EQUIVALENCE: bool = false;
}

/// Diagnostics knobs for the domain singletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainConfig {
    /// Log a warning each time `GenericDomain::message()` is called
    pub warn_on_misuse: bool,
    /// Log every `equivalent()` call and its result at trace level
    pub trace_equivalence: bool,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DomainConfig {
    /// Library defaults, ignoring the environment
    pub const fn defaults() -> Self {
        Self {
            warn_on_misuse: defaults::WARN_ON_MISUSE,
            trace_equivalence: defaults::TRACE_EQUIVALENCE,
        }
    }

    pub fn from_env() -> Self {
        Self {
            warn_on_misuse: env_get_bool("FSMON_ERRORS_WARN_MISUSE", defaults::WARN_ON_MISUSE),
            trace_equivalence: env_get_bool("FSMON_ERRORS_TRACE", defaults::TRACE_EQUIVALENCE),
        }
    }

    pub fn warn_on_misuse(mut self, enabled: bool) -> Self {
        self.warn_on_misuse = enabled;
        self
    }

    pub fn trace_equivalence(mut self, enabled: bool) -> Self {
        self.trace_equivalence = enabled;
        self
    }

    /// Process-wide configuration used by the singletons
    pub fn global() -> &'static DomainConfig {
        static GLOBAL: OnceLock<DomainConfig> = OnceLock::new();
        GLOBAL.get_or_init(DomainConfig::from_env)
    }
}
