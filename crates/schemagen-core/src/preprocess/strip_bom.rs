use super::{Filter, Filtered};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Removes a leading UTF-8 byte-order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripBom;

impl Filter for StripBom {
    fn name(&self) -> &'static str {
        "bom"
    }

    fn apply(&self, input: &[u8]) -> Filtered {
        match input.strip_prefix(BOM) {
            Some(rest) => Filtered {
                bytes: rest.to_vec(),
                edits: 1,
            },
            None => Filtered::unchanged(input),
        }
    }
}
