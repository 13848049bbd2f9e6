//! The inotify error domain
//!
//! inotify reuses the `errno` numbering but some values mean something
//! more specific coming out of `inotify_init1()` / `inotify_add_watch()`.
//! Those get operator-facing text naming the sysctl to raise; every other
//! value renders exactly as the POSIX domain would.

use std::sync::OnceLock;

use fsmon_errors_core::kdebug;
use fsmon_errors_core::{DomainId, ErrorDomain};

use crate::posix;

/// Kernel change-notification domain
#[derive(Debug, Default)]
pub struct InotifyDomain;

impl InotifyDomain {
    /// Text specific to inotify, if `value` has any
    pub fn specific_message(value: i32) -> Option<&'static str> {
        match value {
            libc::EMFILE => Some(
                "The user limit on the total number of inotify instances has been reached; \
                 increase the fs.inotify.max_user_instances sysctl",
            ),
            libc::ENFILE => Some(
                "The system limit on the total number of file descriptors has been reached",
            ),
            libc::ENOMEM => Some("Insufficient kernel memory is available"),
            libc::ENOSPC => Some(
                "The user limit on the total number of inotify watches was reached; \
                 increase the fs.inotify.max_user_watches sysctl",
            ),
            _ => None,
        }
    }
}

impl ErrorDomain for InotifyDomain {
    fn id(&self) -> DomainId {
        DomainId::Inotify
    }

    fn message(&self, value: i32) -> String {
        match Self::specific_message(value) {
            Some(text) => text.to_string(),
            None => posix::errno_message(value),
        }
    }
}

static INOTIFY: OnceLock<InotifyDomain> = OnceLock::new();

/// Process-wide inotify domain
pub fn inotify_domain() -> &'static InotifyDomain {
    INOTIFY.get_or_init(|| {
        kdebug!("constructing {} error domain", DomainId::Inotify);
        InotifyDomain
    })
}
