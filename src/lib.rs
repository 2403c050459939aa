//! Availability compat shims for cross-compiled macOS builds.
//!
//! Objective-C sources built with `@available()` guards compile into calls to
//! the compiler runtime's availability helpers. The SDK stub libraries bundled
//! with cross toolchains (osxcross and friends) do not always export those
//! helpers, which turns an otherwise fine build into a link failure. This
//! crate defines the missing entry points with a deliberately conservative
//! answer: every query reports "not available", so guarded callers take their
//! legacy code paths instead of trusting a version nobody verified.

use libc::c_int;

mod compat_macos;

#[cfg(target_os = "macos")]
pub use compat_macos::{__isOSVersionAtLeast, __isPlatformVersionAtLeast};

/// Mach-O platform identifiers, as hard-coded into the first argument of
/// platform-aware availability checks by compiled call sites.
pub const PLATFORM_MACOS: c_int = 1;
pub const PLATFORM_IOS: c_int = 2;
pub const PLATFORM_TVOS: c_int = 3;
pub const PLATFORM_WATCHOS: c_int = 4;
pub const PLATFORM_MACCATALYST: c_int = 6;

/// Safe wrapper over the platform-aware availability query.
///
/// The answer is always `false`: on macOS the call routes through the shim
/// definition, and on every other target there is nothing to ask. Callers
/// branching on this are expected to fall back to their version-independent
/// path.
pub fn platform_version_at_least(
    platform: c_int,
    major: c_int,
    minor: c_int,
    subminor: c_int,
) -> bool {
    #[cfg(target_os = "macos")]
    {
        compat_macos::__isPlatformVersionAtLeast(platform, major, minor, subminor) != 0
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (platform, major, minor, subminor);
        false
    }
}

/// Safe wrapper over the legacy three-argument availability query.
pub fn os_version_at_least(major: c_int, minor: c_int, subminor: c_int) -> bool {
    #[cfg(target_os = "macos")]
    {
        compat_macos::__isOSVersionAtLeast(major, minor, subminor) != 0
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (major, minor, subminor);
        false
    }
}
