//! Native OS error tables
//!
//! One `PlatformErrors` adapter per platform family, chosen at build time.
//! The rest of the crate only sees `NativeErrors` through [`native()`].

use fsmon_errors_core::PlatformErrors;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::UnixErrors as NativeErrors;
    } else if #[cfg(windows)] {
        mod windows;
        pub use windows::WindowsErrors as NativeErrors;
    } else {
        compile_error!("Unsupported platform");
    }
}

static NATIVE: NativeErrors = NativeErrors::new();

/// The adapter for the platform this crate was built for
#[inline]
pub fn native() -> &'static NativeErrors {
    &NATIVE
}

/// `native()` as a trait object, for callers that store adapters
pub fn native_dyn() -> &'static dyn PlatformErrors {
    &NATIVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsmon_errors_core::ErrorKind;

    #[test]
    fn test_every_kind_reachable_natively() {
        for kind in ErrorKind::ALL {
            assert!(
                (1..4096).any(|v| native().matches(v, kind)),
                "{} has no native code on {}",
                kind,
                native().family()
            );
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for v in 0..256 {
            assert_eq!(native().classify(v), native_dyn().classify(v));
        }
    }
}
