//! # fsmon-errors-core
//!
//! Portable error classification types for the fsmon file-monitoring service.
//!
//! This crate is platform-agnostic and contains no OS-specific code.
//! Error numbering tables and message renderers live in `fsmon-errors`.
//!
//! ## Modules
//!
//! - `kind` - Canonical error kinds shared by every platform
//! - `domain` - Domain tags and the `ErrorDomain` trait
//! - `traits` - Platform adapter trait
//! - `error` - Error type for parsing user input
//! - `kprint` - Kernel-style leveled logging macros
//! - `env` - Environment variable utilities

pub mod kind;
pub mod domain;
pub mod traits;
pub mod error;
pub mod kprint;
pub mod env;

// Re-exports for convenience
pub use kind::ErrorKind;
pub use domain::{DomainId, ErrorDomain};
pub use traits::PlatformErrors;
pub use error::{ErrorsError, ErrorsResult};
pub use env::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set};
