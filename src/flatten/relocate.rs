use crate::error::Error;
use crate::platform;
use fs_extra::error::ErrorKind as FsExtraErrorKind;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Moves `from` to `to` under its new name, replacing any file already at
/// `to`. Falls back to copy-then-delete when the two paths sit on different
/// filesystems.
pub fn relocate(from: &Path, to: &Path) -> Result<(), Error> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if platform::is_cross_device(&err) => {
            warn!(
                "rename {} -> {} crosses devices ({}), copying instead",
                from.display(),
                to.display(),
                err
            );
            move_across_devices(from, to)
        }
        Err(err) => Err(Error::io(from, err)),
    }
}

/// Copy to `to`, overwriting an existing file, then delete `from`.
fn move_across_devices(from: &Path, to: &Path) -> Result<(), Error> {
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::move_file(from, to, &options)
        .map(|_| ())
        .map_err(|e| Error::io(from, into_io_error(e)))
}

fn into_io_error(err: fs_extra::error::Error) -> io::Error {
    let message = err.to_string();
    match err.kind {
        FsExtraErrorKind::Io(io_err) => io_err,
        _ => io::Error::other(message),
    }
}
