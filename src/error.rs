use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort a flatten run.
///
/// A subdirectory that cannot be removed afterwards is not an error; it is
/// recorded as [`crate::RemovalOutcome::Retained`] and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error at {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error listing directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Refusing to overwrite {} with {}", to.display(), from.display())]
    WouldOverwrite { from: PathBuf, to: PathBuf },

    #[error("Target {} is an existing directory", .0.display())]
    TargetIsDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
