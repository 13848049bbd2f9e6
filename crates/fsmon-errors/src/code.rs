//! Domain-tagged raw error codes
//!
//! The comparison contract: a `RawErrorCode` equals an `ErrorKind` exactly
//! when the generic domain says they are equivalent.

use core::fmt;
use core::str::FromStr;
use std::io;

use fsmon_errors_core::{DomainId, ErrorDomain, ErrorKind, ErrorsError, ErrorsResult};

use crate::generic::generic_domain;
use crate::registry;

/// An integer error value plus the domain that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawErrorCode {
    domain: DomainId,
    value: i32,
}

impl RawErrorCode {
    #[inline]
    pub const fn new(domain: DomainId, value: i32) -> Self {
        Self { domain, value }
    }

    /// C runtime `errno` value
    #[inline]
    pub const fn posix(errno: i32) -> Self {
        Self::new(DomainId::Posix, errno)
    }

    /// Native OS value (`errno` on unix, `GetLastError()` on Windows)
    #[inline]
    pub const fn system(value: i32) -> Self {
        Self::new(DomainId::System, value)
    }

    /// `errno` value from an inotify call
    #[inline]
    pub const fn inotify(errno: i32) -> Self {
        Self::new(DomainId::Inotify, errno)
    }

    /// Canonical kind carried as a code
    #[inline]
    pub const fn generic(kind: ErrorKind) -> Self {
        Self::new(DomainId::Generic, kind as i32)
    }

    /// Tag the calling thread's last OS error
    pub fn last_os_error() -> Self {
        let err = io::Error::last_os_error();
        Self::system(err.raw_os_error().unwrap_or(0))
    }

    /// Tag an `io::Error` that carries a raw OS value
    pub fn from_io_error(err: &io::Error) -> Option<Self> {
        err.raw_os_error().map(Self::system)
    }

    #[inline]
    pub const fn domain(&self) -> DomainId {
        self.domain
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Same value, different domain
    #[inline]
    pub const fn retag(self, domain: DomainId) -> Self {
        Self::new(domain, self.value)
    }

    #[inline]
    pub fn is(&self, kind: ErrorKind) -> bool {
        generic_domain().equivalent(*self, kind)
    }

    /// First canonical kind this code is equivalent to
    pub fn kind(&self) -> Option<ErrorKind> {
        generic_domain().classify(*self)
    }

    /// Diagnostic text from the originating domain
    ///
    /// For `Generic` codes this is the misuse sentinel.
    pub fn message(&self) -> String {
        registry::domain(self.domain).message(self.value)
    }
}

impl From<ErrorKind> for RawErrorCode {
    fn from(kind: ErrorKind) -> Self {
        Self::generic(kind)
    }
}

impl PartialEq<ErrorKind> for RawErrorCode {
    fn eq(&self, kind: &ErrorKind) -> bool {
        self.is(*kind)
    }
}

impl PartialEq<RawErrorCode> for ErrorKind {
    fn eq(&self, code: &RawErrorCode) -> bool {
        code.is(*self)
    }
}

impl fmt::Display for RawErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.domain, self.value)?;
        if self.domain.renders_text() {
            f.write_str(&self.message())
        } else {
            match ErrorKind::from_raw(self.value) {
                Some(kind) => write!(f, "{}", kind),
                None => f.write_str("unrecognized"),
            }
        }
    }
}

impl FromStr for RawErrorCode {
    type Err = ErrorsError;

    /// Parse `<domain>:<value>`. For the generic domain the value may also
    /// be a kind name.
    fn from_str(s: &str) -> ErrorsResult<Self> {
        let (domain, value) = s
            .split_once(':')
            .ok_or_else(|| ErrorsError::InvalidValue(s.to_string()))?;
        let domain: DomainId = domain.parse()?;
        Ok(Self::new(domain, parse_value(domain, value)?))
    }
}

/// Parse a raw value given on its own, as the CLI does
pub fn parse_value(domain: DomainId, value: &str) -> ErrorsResult<i32> {
    let value = value.trim();
    if let Ok(v) = value.parse::<i32>() {
        return Ok(v);
    }
    if domain == DomainId::Generic {
        return value.parse::<ErrorKind>().map(ErrorKind::as_raw);
    }
    Err(ErrorsError::InvalidValue(value.to_string()))
}
