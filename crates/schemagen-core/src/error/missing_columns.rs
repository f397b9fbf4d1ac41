use super::Error;

/// Error when the header row lacks one or more of the columns every schema
/// table must carry.
#[derive(Debug)]
pub(super) struct MissingColumnsError {
    missing: Vec<String>,
    actual: Vec<String>,
}

impl std::error::Error for MissingColumnsError {}

impl core::fmt::Display for MissingColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing required columns: [{}] (actual columns: [{}])",
            self.missing.join(", "),
            self.actual.join(", ")
        )
    }
}

impl Error {
    /// Creates a missing-columns error.
    ///
    /// `missing` names the canonical columns that were not found, `actual`
    /// lists the header cells as they appeared in the input.
    pub fn missing_columns(missing: Vec<String>, actual: Vec<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumns(MissingColumnsError {
            missing,
            actual,
        }))
    }

    /// Returns `true` if this error is a missing-columns error.
    pub fn is_missing_columns(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingColumns(_)))
    }
}
