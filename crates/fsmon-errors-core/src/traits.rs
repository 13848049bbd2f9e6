//! Platform traits
//!
//! The interface between the platform-agnostic core and the per-platform
//! error tables in `fsmon-errors`. Exactly one implementation is selected
//! at build time.

use crate::kind::ErrorKind;

/// Classification and rendering of a platform family's native error numbers
pub trait PlatformErrors: Send + Sync {
    /// Short family name (e.g. "unix", "windows")
    fn family(&self) -> &'static str;

    /// Does the native `value` mean `kind` on this platform?
    ///
    /// Must be pure: same inputs, same answer.
    fn matches(&self, value: i32, kind: ErrorKind) -> bool;

    /// OS-provided text for the native `value`
    fn message(&self, value: i32) -> String;

    /// First canonical kind `value` is equivalent to, if any
    fn classify(&self, value: i32) -> Option<ErrorKind> {
        ErrorKind::ALL.into_iter().find(|&k| self.matches(value, k))
    }
}
