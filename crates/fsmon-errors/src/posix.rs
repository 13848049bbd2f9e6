//! POSIX `errno` classification
//!
//! Shared by every domain that numbers its failures with `errno`: the
//! C runtime itself, the unix native domain, and inotify.

use fsmon_errors_core::ErrorKind;

/// Does the `errno` value mean `kind`?
pub fn errno_matches(value: i32, kind: ErrorKind) -> bool {
    match kind {
        ErrorKind::NoSuchFileOrDirectory => value == libc::ENOENT,
        ErrorKind::NotADirectory => value == libc::ENOTDIR,
        // open(O_NOFOLLOW) on a symlink: POSIX says ELOOP, FreeBSD sets EMLINK.
        ErrorKind::TooManySymbolicLinkLevels => matches!(value, libc::ELOOP | libc::EMLINK),
        ErrorKind::PermissionDenied => matches!(value, libc::EACCES | libc::EPERM),
        ErrorKind::SystemLimitsExceeded => matches!(value, libc::ENFILE | libc::EMFILE),
        ErrorKind::TimedOut => value == libc::ETIMEDOUT,
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use nix::errno::Errno;

        /// C runtime text for an `errno` value.
        pub fn errno_message(value: i32) -> String {
            match Errno::from_raw(value) {
                Errno::UnknownErrno => format!("Unknown error {}", value),
                errno => errno.desc().to_string(),
            }
        }
    } else if #[cfg(windows)] {
        use std::ffi::CStr;

        /// C runtime text for an `errno` value.
        pub fn errno_message(value: i32) -> String {
            // SAFETY: the CRT returns a thread-local, NUL-terminated buffer
            // that stays valid until the next strerror call on this thread.
            let ptr = unsafe { libc::strerror(value) };
            if ptr.is_null() {
                return format!("Unknown error {}", value);
            }
            unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
        }
    } else {
        compile_error!("Unsupported platform");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_for(value: i32) -> Vec<ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .filter(|&k| errno_matches(value, k))
            .collect()
    }

    #[test]
    fn test_each_errno_maps_to_one_kind() {
        assert_eq!(kinds_for(libc::ENOENT), vec![ErrorKind::NoSuchFileOrDirectory]);
        assert_eq!(kinds_for(libc::ENOTDIR), vec![ErrorKind::NotADirectory]);
        assert_eq!(kinds_for(libc::ELOOP), vec![ErrorKind::TooManySymbolicLinkLevels]);
        assert_eq!(kinds_for(libc::EMLINK), vec![ErrorKind::TooManySymbolicLinkLevels]);
        assert_eq!(kinds_for(libc::EACCES), vec![ErrorKind::PermissionDenied]);
        assert_eq!(kinds_for(libc::EPERM), vec![ErrorKind::PermissionDenied]);
        assert_eq!(kinds_for(libc::ENFILE), vec![ErrorKind::SystemLimitsExceeded]);
        assert_eq!(kinds_for(libc::EMFILE), vec![ErrorKind::SystemLimitsExceeded]);
        assert_eq!(kinds_for(libc::ETIMEDOUT), vec![ErrorKind::TimedOut]);
    }

    #[test]
    fn test_unrelated_errno_is_unrecognized() {
        assert!(kinds_for(libc::EINVAL).is_empty());
        assert!(kinds_for(libc::ENOSPC).is_empty());
        assert!(kinds_for(0).is_empty());
        assert!(kinds_for(-1).is_empty());
    }

    #[test]
    fn test_every_kind_reachable() {
        for kind in ErrorKind::ALL {
            assert!((1..4096).any(|v| errno_matches(v, kind)), "{} unreachable", kind);
        }
    }

    #[test]
    fn test_message_nonempty() {
        assert!(!errno_message(libc::ENOENT).is_empty());
        assert_ne!(errno_message(libc::ENOENT), errno_message(libc::EACCES));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_messages() {
        assert_eq!(errno_message(libc::ENOENT), "No such file or directory");
        assert_eq!(errno_message(libc::EACCES), "Permission denied");
        assert_eq!(errno_message(99_999), "Unknown error 99999");
    }
}
