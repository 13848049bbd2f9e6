//! Unix native errors
//!
//! The native numbering on unix is `errno`, so this adapter is a thin
//! front for the POSIX table.

use fsmon_errors_core::{ErrorKind, PlatformErrors};

use crate::posix;

/// Unix platform error table
pub struct UnixErrors;

impl UnixErrors {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for UnixErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformErrors for UnixErrors {
    fn family(&self) -> &'static str {
        "unix"
    }

    #[inline]
    fn matches(&self, value: i32, kind: ErrorKind) -> bool {
        posix::errno_matches(value, kind)
    }

    fn message(&self, value: i32) -> String {
        posix::errno_message(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agrees_with_posix_table() {
        let p = UnixErrors::new();
        for v in 0..512 {
            for kind in ErrorKind::ALL {
                assert_eq!(p.matches(v, kind), posix::errno_matches(v, kind));
            }
        }
    }

    #[test]
    fn test_classify() {
        let p = UnixErrors::new();
        assert_eq!(p.classify(libc::ETIMEDOUT), Some(ErrorKind::TimedOut));
        assert_eq!(p.classify(libc::EINTR), None);
    }
}
