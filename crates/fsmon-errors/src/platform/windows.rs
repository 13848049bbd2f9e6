//! Windows native errors
//!
//! Win32 system error codes as returned by `GetLastError()`. These live in
//! their own numbering space; `2` here is `ERROR_FILE_NOT_FOUND`, not
//! `ENOENT`, which is why codes are always domain-tagged.

use fsmon_errors_core::{ErrorKind, PlatformErrors};

pub const ERROR_FILE_NOT_FOUND: i32 = 2;
pub const ERROR_PATH_NOT_FOUND: i32 = 3;
pub const ERROR_TOO_MANY_OPEN_FILES: i32 = 4;
pub const ERROR_ACCESS_DENIED: i32 = 5;
pub const ERROR_INVALID_ACCESS: i32 = 12;
pub const ERROR_WRITE_PROTECT: i32 = 19;
pub const ERROR_DEV_NOT_EXIST: i32 = 55;
pub const WAIT_TIMEOUT: i32 = 258;
pub const ERROR_TOO_MANY_LINKS: i32 = 1142;
pub const ERROR_TIMEOUT: i32 = 1460;
pub const ERROR_CANT_RESOLVE_FILENAME: i32 = 1921;

/// Windows platform error table
pub struct WindowsErrors;

impl WindowsErrors {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WindowsErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformErrors for WindowsErrors {
    fn family(&self) -> &'static str {
        "windows"
    }

    fn matches(&self, value: i32, kind: ErrorKind) -> bool {
        match kind {
            ErrorKind::NoSuchFileOrDirectory => {
                matches!(value, ERROR_FILE_NOT_FOUND | ERROR_DEV_NOT_EXIST)
            }
            ErrorKind::NotADirectory => value == ERROR_PATH_NOT_FOUND,
            ErrorKind::TooManySymbolicLinkLevels => {
                matches!(value, ERROR_CANT_RESOLVE_FILENAME | ERROR_TOO_MANY_LINKS)
            }
            ErrorKind::PermissionDenied => matches!(
                value,
                ERROR_ACCESS_DENIED | ERROR_INVALID_ACCESS | ERROR_WRITE_PROTECT
            ),
            ErrorKind::SystemLimitsExceeded => value == ERROR_TOO_MANY_OPEN_FILES,
            ErrorKind::TimedOut => matches!(value, ERROR_TIMEOUT | WAIT_TIMEOUT),
        }
    }

    fn message(&self, value: i32) -> String {
        // std renders via FormatMessageW and appends " (os error N)".
        let text = std::io::Error::from_raw_os_error(value).to_string();
        let suffix = format!(" (os error {})", value);
        match text.strip_suffix(suffix.as_str()) {
            Some(body) => body.trim_end().to_string(),
            None => text,
        }
    }
}
