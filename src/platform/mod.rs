#[cfg(target_os = "windows")]
pub mod windows;

use std::io;

/// EXDEV on Linux, macOS and the BSDs.
#[cfg(unix)]
const EXDEV: i32 = 18;

/// Whether `err` came from renaming across filesystems, which `fs::rename`
/// cannot do and a copy-then-delete can.
#[cfg(target_os = "windows")]
pub fn is_cross_device(err: &io::Error) -> bool {
    windows::is_not_same_device(err)
}

#[cfg(unix)]
pub fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(EXDEV)
}

#[cfg(not(any(unix, target_os = "windows")))]
pub fn is_cross_device(_err: &io::Error) -> bool {
    false
}
