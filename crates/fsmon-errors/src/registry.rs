//! Domain dispatch table
//!
//! Maps a `DomainId` tag to the singleton that renders its text and to the
//! strategy that classifies its values. Adding a domain tag forces both
//! matches below to be revisited.

use fsmon_errors_core::{DomainId, ErrorDomain, ErrorKind, PlatformErrors};

use crate::generic::generic_domain;
use crate::inotify::inotify_domain;
use crate::native::{posix_domain, system_domain};
use crate::platform;
use crate::posix;

/// Classification strategy: does raw `value` mean `kind`?
pub type Classifier = fn(i32, ErrorKind) -> bool;

/// Singleton responsible for rendering codes tagged `id`
pub fn domain(id: DomainId) -> &'static dyn ErrorDomain {
    match id {
        DomainId::Generic => generic_domain(),
        DomainId::Posix => posix_domain(),
        DomainId::System => system_domain(),
        DomainId::Inotify => inotify_domain(),
    }
}

/// Strategy used to classify codes tagged `id`
pub fn classifier(id: DomainId) -> Classifier {
    match id {
        DomainId::Generic => canonical_matches,
        // inotify values are errno values; only the text differs.
        DomainId::Posix | DomainId::Inotify => posix::errno_matches,
        DomainId::System => native_matches,
    }
}

fn canonical_matches(value: i32, kind: ErrorKind) -> bool {
    value == kind.as_raw()
}

fn native_matches(value: i32, kind: ErrorKind) -> bool {
    platform::native().matches(value, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_identity_matches_tag() {
        for id in DomainId::ALL {
            assert_eq!(domain(id).id(), id);
            assert_eq!(domain(id).name(), id.as_str());
        }
    }

    #[test]
    fn test_domain_returns_same_instance() {
        for id in DomainId::ALL {
            let a = domain(id) as *const dyn ErrorDomain as *const ();
            let b = domain(id) as *const dyn ErrorDomain as *const ();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_every_kind_reachable_from_every_os_domain() {
        for id in [DomainId::Posix, DomainId::System, DomainId::Inotify] {
            let matches = classifier(id);
            for kind in ErrorKind::ALL {
                assert!((1..4096).any(|v| matches(v, kind)), "{} in {}", kind, id);
            }
        }
    }
}
