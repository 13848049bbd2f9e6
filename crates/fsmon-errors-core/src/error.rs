//! Error types for fsmon-errors
//!
//! Classification itself never fails. These only cover parsing of
//! operator-supplied names and numbers.

use core::fmt;

/// Result type for parsing operations
pub type ErrorsResult<T> = Result<T, ErrorsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorsError {
    /// Not one of the canonical kind names
    UnknownKind(String),

    /// Not one of the domain names
    UnknownDomain(String),

    /// Raw value is not a 32-bit integer
    InvalidValue(String),
}

impl fmt::Display for ErrorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorsError::UnknownKind(s) => write!(f, "unknown error kind: {}", s),
            ErrorsError::UnknownDomain(s) => write!(f, "unknown error domain: {}", s),
            ErrorsError::InvalidValue(s) => write!(f, "invalid raw error value: {}", s),
        }
    }
}

impl std::error::Error for ErrorsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = ErrorsError::UnknownKind("nope".into());
        assert_eq!(format!("{}", e), "unknown error kind: nope");

        let e = ErrorsError::InvalidValue("x1".into());
        assert_eq!(format!("{}", e), "invalid raw error value: x1");
    }
}
