//! # fsmon-errors
//!
//! Normalizes platform and subsystem error numbers into the canonical
//! [`ErrorKind`]s so that the watcher can decide retry and recovery policy
//! without knowing OS numbering.
//!
//! Every raw value is tagged with the domain that produced it:
//!
//! | Domain    | Numbering                          | Text                         |
//! |-----------|------------------------------------|------------------------------|
//! | `fsmon`   | canonical kinds                    | misuse sentinel only         |
//! | `posix`   | C runtime `errno`                  | C runtime                    |
//! | `system`  | `errno` on unix, Win32 on Windows  | OS                           |
//! | `inotify` | `errno`                            | sysctl hints, else C runtime |
//!
//! ```rust
//! use fsmon_errors::{ErrorKind, RawErrorCode};
//!
//! let code = RawErrorCode::inotify(libc::ENOSPC);
//! assert!(code != ErrorKind::PermissionDenied);
//! assert!(code.message().contains("max_user_watches"));
//! ```
//!
//! All domains are immutable singletons built on first use.

pub mod config;
pub mod posix;
pub mod platform;
pub mod generic;
pub mod native;
pub mod inotify;
pub mod registry;
pub mod code;
pub mod io;

pub use fsmon_errors_core::{DomainId, ErrorDomain, ErrorKind, ErrorsError, ErrorsResult, PlatformErrors};

pub use code::RawErrorCode;
pub use config::DomainConfig;
pub use generic::{generic_domain, GenericDomain, MISUSE_MESSAGE};
pub use inotify::{inotify_domain, InotifyDomain};
pub use io::IoErrorExt;
pub use native::{posix_domain, system_domain, PosixDomain, SystemDomain};
pub use registry::domain;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_first_access() {
        let barrier = Arc::new(std::sync::Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let addr = generic_domain() as *const GenericDomain as usize;
                    let hit = RawErrorCode::inotify(libc::EACCES) == ErrorKind::PermissionDenied;
                    (addr, hit, inotify_domain().message(libc::EMFILE))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let (addr0, _, msg0) = &results[0];
        for (addr, hit, msg) in &results {
            assert_eq!(addr, addr0);
            assert!(hit);
            assert_eq!(msg, msg0);
        }
    }

    #[test]
    fn test_caller_workflow() {
        // catch, tag, classify, render with the originating domain
        let err = std::io::Error::from_raw_os_error(libc::EMFILE);
        let code = err.inotify_code().unwrap();
        let retry = code == ErrorKind::SystemLimitsExceeded;
        assert!(retry);
        assert_ne!(code.message(), MISUSE_MESSAGE);
        assert!(code.message().contains("max_user_instances"));
    }
}
