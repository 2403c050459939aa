#![cfg(target_os = "macos")]
#![allow(non_snake_case)]

// Availability entry points normally provided by the compiler runtime.
//
// SDK stub libraries used for cross builds may omit these, while Objective-C
// `@available()` checks compile into references to them. The definitions here
// always answer "not available" so guarded code falls back to its legacy path
// rather than trusting a version we cannot verify.

use libc::c_int;

/// Platform-aware availability query, the `@available(macOS 10.x, *)` form.
///
/// The platform and version arguments are accepted but never inspected; the
/// answer is unconditionally "not available" (`0`).
#[no_mangle]
pub extern "C" fn __isPlatformVersionAtLeast(
    _platform: c_int,
    _major: c_int,
    _minor: c_int,
    _subminor: c_int,
) -> c_int {
    0
}

/// Legacy three-argument query emitted for older deployment targets.
#[no_mangle]
pub extern "C" fn __isOSVersionAtLeast(_major: c_int, _minor: c_int, _subminor: c_int) -> c_int {
    0
}
