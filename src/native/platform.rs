//! # Platform Artifact Selection
//!
//! Maps the running OS/architecture to the name of the native hash library
//! shipped for it. Names follow `lib<name>-<os>-<arch>.so`, with the
//! `<name><bits>bit.dll` form on Windows.

use crate::error::{HashError, HashResult};

/// Artifact name for the current platform
pub fn platform_library_name() -> HashResult<&'static str> {
    library_name_for(std::env::consts::OS, std::env::consts::ARCH)
}

/// Artifact name for an `(os, arch)` pair as reported by `std::env::consts`
pub fn library_name_for(os: &str, arch: &str) -> HashResult<&'static str> {
    let name = match (os, arch) {
        ("windows", "x86_64") => "niantichash64bit.dll",
        ("windows", "x86") => "niantichash32bit.dll",
        ("macos", "x86_64") | ("macos", "aarch64") => "libniantichash-osx-64.so",
        ("linux", "x86_64") => "libniantichash-linux-x86-64.so",
        ("linux", "x86") => "libniantichash-linux-x86-32.so",
        ("linux", "aarch64") => "libniantichash-linux-arm-64.so",
        ("linux", "arm") => "libniantichash-linux-arm-32.so",
        ("freebsd", "x86_64") => "libniantichash-freebsd-64.so",
        _ => {
            return Err(HashError::unavailable(format!(
                "unsupported platform '{}-{}'",
                os, arch
            )))
        }
    };
    Ok(name)
}
