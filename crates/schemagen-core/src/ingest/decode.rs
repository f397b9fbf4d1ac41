use crate::{Error, Result};

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

const BOM: char = '\u{feff}';

/// Encodings to try, in order, when the input is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encodings {
    fallbacks: Vec<&'static Encoding>,
}

impl Default for Encodings {
    /// `windows-1252` maps every byte, so nothing after it would be tried.
    fn default() -> Self {
        Self {
            fallbacks: vec![WINDOWS_1252],
        }
    }
}

impl Encodings {
    pub fn new(fallbacks: Vec<&'static Encoding>) -> Self {
        Self { fallbacks }
    }

    /// UTF-8 only; any invalid byte sequence is fatal.
    pub fn utf8_only() -> Self {
        Self { fallbacks: vec![] }
    }

    /// Resolves WHATWG encoding labels such as `latin1` or `windows-1252`.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fallbacks = vec![];

        for label in labels {
            let label = label.as_ref();
            let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
                return Err(Error::invalid_config(format!(
                    "unknown encoding label `{label}`"
                )));
            };
            fallbacks.push(encoding);
        }

        Ok(Self { fallbacks })
    }

    pub fn fallbacks(&self) -> &[&'static Encoding] {
        &self.fallbacks
    }
}

/// Text decoded from raw input, with the encoding that succeeded.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Decodes `bytes` as UTF-8, falling back to each configured encoding.
///
/// Decoding is strict: an encoding is only accepted if it maps every byte.
pub fn decode(bytes: &[u8], encodings: &Encodings) -> Result<Decoded> {
    let candidates = core::iter::once(UTF_8).chain(encodings.fallbacks.iter().copied());

    for encoding in candidates.clone() {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            if encoding != UTF_8 {
                tracing::info!(
                    encoding = encoding.name(),
                    "input is not valid UTF-8; decoded with fallback encoding"
                );
            }

            return Ok(Decoded {
                text: text.into_owned(),
                encoding,
            });
        }
    }

    Err(Error::undecodable_input(
        candidates.map(Encoding::name).collect(),
    ))
}

/// Removes a leading byte-order mark.
///
/// Must run before the header row is parsed, or the BOM ends up fused into
/// the first column name.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Decodes and strips the BOM in one step.
pub(crate) fn decode_text(bytes: &[u8], encodings: &Encodings) -> Result<Decoded> {
    let mut decoded = decode(bytes, encodings)?;
    if decoded.text.starts_with(BOM) {
        decoded.text.drain(..BOM.len_utf8());
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_tried_first() {
        let decoded = decode("xpath,naïve".as_bytes(), &Encodings::default()).unwrap();
        assert_eq!(decoded.encoding, UTF_8);
        assert_eq!(decoded.text, "xpath,naïve");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "café" in windows-1252
        let decoded = decode(b"caf\xe9", &Encodings::default()).unwrap();
        assert_eq!(decoded.encoding, WINDOWS_1252);
        assert_eq!(decoded.text, "café");
    }

    #[test]
    fn default_fallback_accepts_every_byte() {
        let encodings = Encodings::default();
        assert_eq!(encodings.fallbacks(), &[WINDOWS_1252]);

        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode(&bytes, &encodings).unwrap();
        assert_eq!(decoded.encoding, WINDOWS_1252);
        assert_eq!(decoded.text.chars().count(), 256);
    }

    #[test]
    fn no_fallbacks_means_invalid_utf8_is_fatal() {
        let err = decode(b"caf\xe9", &Encodings::utf8_only()).unwrap_err();
        assert!(err.is_undecodable_input());
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn labels_resolve() {
        let encodings = Encodings::from_labels(["latin1", "iso-8859-15"]).unwrap();
        assert_eq!(encodings.fallbacks(), &[WINDOWS_1252, encoding_rs::ISO_8859_15]);

        let err = Encodings::from_labels(["klingon"]).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(strip_bom("\u{feff}xpath,a"), "xpath,a");
        assert_eq!(strip_bom("xpath,a"), "xpath,a");
    }
}
