use super::Error;
use std::path::{Path, PathBuf};

/// Error when reading or writing a file fails for a reason other than the
/// input being absent.
#[derive(Debug)]
pub(super) struct IoError {
    path: Option<PathBuf>,
    source: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "cannot read {}: {}", path.display(), self.source),
            None => write!(f, "i/o failure: {}", self.source),
        }
    }
}

impl Error {
    /// Creates an I/O error, optionally naming the file involved.
    pub fn io(path: Option<&Path>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError {
            path: path.map(Path::to_path_buf),
            source,
        }))
    }

    /// Returns `true` if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Io(_)))
    }
}
