//! Canonical error kinds
//!
//! A closed set of portable outcomes. Callers branch recovery policy on
//! these instead of on raw OS numbers.

use core::fmt;
use core::str::FromStr;

use crate::error::ErrorsError;

/// Portable classification of a failure.
///
/// Discriminants are stable and double as the integer "condition" form
/// accepted by `GenericDomain::equivalent_raw`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    NoSuchFileOrDirectory = 1,
    NotADirectory = 2,
    TooManySymbolicLinkLevels = 3,
    PermissionDenied = 4,
    SystemLimitsExceeded = 5,
    TimedOut = 6,
}

impl ErrorKind {
    /// Every canonical kind, in discriminant order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::NoSuchFileOrDirectory,
        ErrorKind::NotADirectory,
        ErrorKind::TooManySymbolicLinkLevels,
        ErrorKind::PermissionDenied,
        ErrorKind::SystemLimitsExceeded,
        ErrorKind::TimedOut,
    ];

    /// Map an integer condition back onto the closed set.
    ///
    /// Anything outside `1..=6` is not a canonical kind.
    pub fn from_raw(v: i32) -> Option<Self> {
        match v {
            1 => Some(ErrorKind::NoSuchFileOrDirectory),
            2 => Some(ErrorKind::NotADirectory),
            3 => Some(ErrorKind::TooManySymbolicLinkLevels),
            4 => Some(ErrorKind::PermissionDenied),
            5 => Some(ErrorKind::SystemLimitsExceeded),
            6 => Some(ErrorKind::TimedOut),
            _ => None,
        }
    }

    #[inline]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoSuchFileOrDirectory => "no_such_file_or_directory",
            ErrorKind::NotADirectory => "not_a_directory",
            ErrorKind::TooManySymbolicLinkLevels => "too_many_symbolic_link_levels",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::SystemLimitsExceeded => "system_limits_exceeded",
            ErrorKind::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = ErrorsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ErrorsError::UnknownKind(s.to_string()))
    }
}
