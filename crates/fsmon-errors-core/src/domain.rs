//! Error domains
//!
//! A raw error number only means something inside the domain that produced
//! it. Every raw code carries a `DomainId` tag so that the same integer from
//! two namespaces is never confused.

use core::fmt;
use core::str::FromStr;

use crate::error::ErrorsError;

/// Tag identifying which numbering space a raw error value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainId {
    /// Canonical fsmon kinds. Classification only, never rendered.
    Generic,
    /// C runtime `errno` numbering.
    Posix,
    /// The platform's native OS numbering (`errno` on unix, Win32 on Windows).
    System,
    /// Kernel change-notification facility. Shares the `errno` space.
    Inotify,
}

impl DomainId {
    pub const ALL: [DomainId; 4] = [
        DomainId::Generic,
        DomainId::Posix,
        DomainId::System,
        DomainId::Inotify,
    ];

    /// Identity string; equal to the matching domain's `name()`.
    pub fn as_str(self) -> &'static str {
        match self {
            DomainId::Generic => "fsmon",
            DomainId::Posix => "posix",
            DomainId::System => "system",
            DomainId::Inotify => "inotify",
        }
    }

    /// Whether `message()` on this domain yields real diagnostic text.
    #[inline]
    pub fn renders_text(self) -> bool {
        !matches!(self, DomainId::Generic)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = ErrorsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DomainId::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| ErrorsError::UnknownDomain(s.to_string()))
    }
}

/// A named, stateless classifier owning message rendering for its values.
///
/// Implementations are process-wide singletons; every method must be pure
/// and callable concurrently without synchronization.
pub trait ErrorDomain: Send + Sync {
    /// Tag that raw codes from this domain carry
    fn id(&self) -> DomainId;

    /// Fixed identity string
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Render diagnostic text for a raw value from this domain
    fn message(&self, value: i32) -> String;
}
