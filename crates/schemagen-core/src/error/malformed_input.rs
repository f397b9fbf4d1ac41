use super::Error;

/// Error when the table as a whole cannot be read, e.g. the header row
/// itself is missing or unparsable.
///
/// Individual malformed records never produce this error; they are skipped.
#[derive(Debug)]
pub(super) struct MalformedInputError {
    message: Box<str>,
}

impl std::error::Error for MalformedInputError {}

impl core::fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed input: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed-input error.
    pub fn malformed_input(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedInput(MalformedInputError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed-input error.
    pub fn is_malformed_input(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedInput(_)))
    }
}
