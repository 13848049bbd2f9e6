//! The generic (canonical) error domain
//!
//! Owns the equivalence relation between domain-tagged raw codes and
//! canonical [`ErrorKind`]s. It never renders real text: canonical kinds
//! carry no OS wording, so `message()` returns [`MISUSE_MESSAGE`].

use std::sync::OnceLock;

use fsmon_errors_core::{kdebug, ktrace, kwarn};
use fsmon_errors_core::{DomainId, ErrorDomain, ErrorKind};

use crate::code::RawErrorCode;
use crate::config::DomainConfig;
use crate::registry;

/// Returned by `GenericDomain::message()`. Seeing it in output means a
/// caller rendered with the wrong domain.
pub const MISUSE_MESSAGE: &str = "the programmer should not be trying to render an error message \
                                  using the fsmon error domain, please report this bug!";

/// Canonical classifier
#[derive(Debug)]
pub struct GenericDomain {
    config: DomainConfig,
}

impl GenericDomain {
    pub fn with_config(config: DomainConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Does `code` mean `kind`?
    ///
    /// Dispatches on the code's domain tag. Inotify values are plain
    /// `errno` numbers and classify exactly like POSIX codes.
    pub fn equivalent(&self, code: RawErrorCode, kind: ErrorKind) -> bool {
        let hit = registry::classifier(code.domain())(code.value(), kind);
        if self.config.trace_equivalence {
            ktrace!("{}:{} ~ {} => {}", code.domain(), code.value(), kind, hit);
        }
        hit
    }

    /// Integer-condition form of [`equivalent`](Self::equivalent).
    ///
    /// Conditions outside the canonical set are never equivalent.
    pub fn equivalent_raw(&self, code: RawErrorCode, condition: i32) -> bool {
        match ErrorKind::from_raw(condition) {
            Some(kind) => self.equivalent(code, kind),
            None => {
                if self.config.trace_equivalence {
                    ktrace!("{}:{} ~ condition {} => false (not canonical)",
                        code.domain(), code.value(), condition);
                }
                false
            }
        }
    }

    /// First canonical kind `code` is equivalent to
    pub fn classify(&self, code: RawErrorCode) -> Option<ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .find(|&kind| self.equivalent(code, kind))
    }
}

impl ErrorDomain for GenericDomain {
    fn id(&self) -> DomainId {
        DomainId::Generic
    }

    fn message(&self, value: i32) -> String {
        if self.config.warn_on_misuse {
            kwarn!("message({}) requested from the {} domain; render with the originating domain instead",
                value, self.name());
        }
        MISUSE_MESSAGE.to_string()
    }
}

static GENERIC: OnceLock<GenericDomain> = OnceLock::new();

/// Process-wide generic domain
pub fn generic_domain() -> &'static GenericDomain {
    GENERIC.get_or_init(|| {
        kdebug!("constructing {} error domain", DomainId::Generic);
        GenericDomain::with_config(*DomainConfig::global())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> GenericDomain {
        GenericDomain::with_config(DomainConfig::defaults().warn_on_misuse(false))
    }

    #[test]
    fn test_enoent_only_means_no_such_file() {
        let d = quiet();
        for domain in [DomainId::Posix, DomainId::System, DomainId::Inotify] {
            let code = RawErrorCode::new(domain, libc::ENOENT);
            for kind in ErrorKind::ALL {
                assert_eq!(
                    d.equivalent(code, kind),
                    kind == ErrorKind::NoSuchFileOrDirectory,
                    "{} vs {}",
                    code,
                    kind
                );
            }
        }
    }

    #[test]
    fn test_inotify_classifies_like_posix() {
        let d = quiet();
        for v in 0..256 {
            for kind in ErrorKind::ALL {
                assert_eq!(
                    d.equivalent(RawErrorCode::inotify(v), kind),
                    d.equivalent(RawErrorCode::posix(v), kind)
                );
            }
        }
        assert!(d.equivalent(RawErrorCode::inotify(libc::EACCES), ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_symlink_alias() {
        let d = quiet();
        assert!(d.equivalent(RawErrorCode::posix(libc::ELOOP), ErrorKind::TooManySymbolicLinkLevels));
        assert!(d.equivalent(RawErrorCode::posix(libc::EMLINK), ErrorKind::TooManySymbolicLinkLevels));
    }

    #[test]
    fn test_generic_codes_match_their_own_kind() {
        let d = quiet();
        for kind in ErrorKind::ALL {
            for other in ErrorKind::ALL {
                assert_eq!(d.equivalent(RawErrorCode::generic(kind), other), kind == other);
            }
        }
        assert_eq!(d.classify(RawErrorCode::new(DomainId::Generic, 0)), None);
    }

    #[test]
    fn test_conditions_outside_closed_set() {
        let d = quiet();
        let code = RawErrorCode::posix(libc::ENOENT);
        assert!(d.equivalent_raw(code, ErrorKind::NoSuchFileOrDirectory.as_raw()));
        for condition in [0, 7, -1, 100, i32::MIN, i32::MAX] {
            assert!(!d.equivalent_raw(code, condition));
        }
    }

    #[test]
    fn test_message_is_misuse_sentinel() {
        let d = quiet();
        for kind in ErrorKind::ALL {
            let msg = d.message(kind.as_raw());
            assert_eq!(msg, MISUSE_MESSAGE);
            assert!(!msg.is_empty());
        }
        assert_eq!(d.message(libc::ENOENT), MISUSE_MESSAGE);
    }

    #[test]
    fn test_tracing_does_not_change_answers() {
        let traced = GenericDomain::with_config(DomainConfig::defaults().trace_equivalence(true));
        let plain = quiet();
        for v in [libc::ENOENT, libc::EPERM, libc::ETIMEDOUT, libc::EINVAL] {
            let code = RawErrorCode::system(v);
            assert_eq!(traced.classify(code), plain.classify(code));
        }
    }

    #[test]
    fn test_singleton_identity() {
        let a = generic_domain() as *const GenericDomain;
        let b = generic_domain() as *const GenericDomain;
        assert_eq!(a, b);
        assert_eq!(generic_domain().name(), "fsmon");
        assert_eq!(generic_domain().name(), generic_domain().name());
    }
}
