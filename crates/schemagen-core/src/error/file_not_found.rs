use super::Error;
use std::path::{Path, PathBuf};

/// Error when the schema file given to the run does not exist.
#[derive(Debug)]
pub(super) struct FileNotFoundError {
    path: PathBuf,
}

impl std::error::Error for FileNotFoundError {}

impl core::fmt::Display for FileNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "input file not found: {}", self.path.display())
    }
}

impl Error {
    /// Creates a file-not-found error for the given input path.
    pub fn file_not_found(path: &Path) -> Error {
        Error::from(super::ErrorKind::FileNotFound(FileNotFoundError {
            path: path.to_path_buf(),
        }))
    }

    /// Returns `true` if this error is a file-not-found error.
    pub fn is_file_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::FileNotFound(_)))
    }
}
