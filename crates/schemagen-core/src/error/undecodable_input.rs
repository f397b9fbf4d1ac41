use super::Error;

/// Error when the input bytes are not valid under UTF-8 nor under any of the
/// configured fallback encodings.
#[derive(Debug)]
pub(super) struct UndecodableInputError {
    tried: Vec<&'static str>,
}

impl std::error::Error for UndecodableInputError {}

impl core::fmt::Display for UndecodableInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "input could not be decoded (tried: {})",
            self.tried.join(", ")
        )
    }
}

impl Error {
    /// Creates an undecodable-input error listing the encodings attempted.
    pub fn undecodable_input(tried: Vec<&'static str>) -> Error {
        Error::from(super::ErrorKind::UndecodableInput(UndecodableInputError {
            tried,
        }))
    }

    /// Returns `true` if this error is an undecodable-input error.
    pub fn is_undecodable_input(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UndecodableInput(_)))
    }
}
