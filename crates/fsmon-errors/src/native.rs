//! OS-native domains
//!
//! These only render text. Their codes are classified by the generic
//! domain through the registry.

use std::sync::OnceLock;

use fsmon_errors_core::kdebug;
use fsmon_errors_core::{DomainId, ErrorDomain, PlatformErrors};

use crate::platform;
use crate::posix;

/// C runtime `errno` domain
#[derive(Debug, Default)]
pub struct PosixDomain;

impl ErrorDomain for PosixDomain {
    fn id(&self) -> DomainId {
        DomainId::Posix
    }

    fn message(&self, value: i32) -> String {
        posix::errno_message(value)
    }
}

/// The platform's native OS domain
#[derive(Debug, Default)]
pub struct SystemDomain;

impl ErrorDomain for SystemDomain {
    fn id(&self) -> DomainId {
        DomainId::System
    }

    fn message(&self, value: i32) -> String {
        platform::native().message(value)
    }
}

static POSIX: OnceLock<PosixDomain> = OnceLock::new();
static SYSTEM: OnceLock<SystemDomain> = OnceLock::new();

pub fn posix_domain() -> &'static PosixDomain {
    POSIX.get_or_init(|| {
        kdebug!("constructing {} error domain", DomainId::Posix);
        PosixDomain
    })
}

pub fn system_domain() -> &'static SystemDomain {
    SYSTEM.get_or_init(|| {
        kdebug!("constructing {} error domain ({})", DomainId::System, platform::native().family());
        SystemDomain
    })
}
