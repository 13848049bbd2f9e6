//! `std::io::Error` integration
//!
//! Watcher backends surface failures as `io::Error`. This lets them ask
//! canonical questions without unpacking `raw_os_error()` by hand.

use std::io;

use fsmon_errors_core::ErrorKind;

use crate::code::RawErrorCode;

/// Canonical classification for `io::Error`
pub trait IoErrorExt {
    /// Native OS code, tagged `System`
    fn raw_code(&self) -> Option<RawErrorCode>;

    /// Same value, tagged as coming from an inotify call
    fn inotify_code(&self) -> Option<RawErrorCode>;

    /// Does this error mean `kind`? Errors without an OS code never do.
    fn is_kind(&self, kind: ErrorKind) -> bool {
        self.raw_code().map_or(false, |code| code.is(kind))
    }

    fn canonical_kind(&self) -> Option<ErrorKind> {
        self.raw_code().and_then(|code| code.kind())
    }
}

impl IoErrorExt for io::Error {
    fn raw_code(&self) -> Option<RawErrorCode> {
        RawErrorCode::from_io_error(self)
    }

    fn inotify_code(&self) -> Option<RawErrorCode> {
        self.raw_os_error().map(RawErrorCode::inotify)
    }
}
