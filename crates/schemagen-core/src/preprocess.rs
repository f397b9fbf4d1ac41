//! Repairs for schema tables that a spreadsheet export mangled.
//!
//! Filters work on raw bytes, before decoding, and are never applied
//! implicitly: the ingestor already tolerates a BOM and stray quotes, so
//! these exist for inputs that are broken beyond that, and for writing a
//! repaired copy back to disk.

mod clean_quotes;
pub use clean_quotes::CleanQuotes;

mod rejoin_lines;
pub use rejoin_lines::RejoinLines;

mod strip_bom;
pub use strip_bom::StripBom;

/// A single repair step over raw input bytes.
pub trait Filter: core::fmt::Debug {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn apply(&self, input: &[u8]) -> Filtered;
}

/// Output of a [`Filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub bytes: Vec<u8>,

    /// How many changes the filter made; zero means `bytes` equals the input
    pub edits: usize,
}

impl Filtered {
    pub fn unchanged(input: &[u8]) -> Filtered {
        Filtered {
            bytes: input.to_vec(),
            edits: 0,
        }
    }
}

/// Filters applied one after another.
#[derive(Debug, Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Runs every filter in order; `edits` is the total across filters.
    pub fn apply(&self, input: &[u8]) -> Filtered {
        let mut out = Filtered::unchanged(input);

        for filter in &self.filters {
            let step = filter.apply(&out.bytes);
            tracing::info!(filter = filter.name(), edits = step.edits, "applied filter");

            out = Filtered {
                bytes: step.bytes,
                edits: out.edits + step.edits,
            };
        }

        out
    }
}

/// Splits on `\n`, dropping a `\r` before it. The returned flag tells
/// whether the input ended with a newline.
fn split_lines(input: &[u8]) -> (Vec<&[u8]>, bool) {
    if input.is_empty() {
        return (vec![], false);
    }

    let trailing_newline = input.ends_with(b"\n");
    let body = if trailing_newline {
        &input[..input.len() - 1]
    } else {
        input
    };

    let lines = body
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();

    (lines, trailing_newline)
}

fn join_lines<L: AsRef<[u8]>>(lines: &[L], trailing_newline: bool) -> Vec<u8> {
    let mut out = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(line.as_ref());
    }

    if trailing_newline {
        out.push(b'\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_sums_edits() {
        let pipeline = Pipeline::new().with(StripBom).with(RejoinLines);
        assert_eq!(pipeline.len(), 2);

        let out = pipeline.apply(b"\xEF\xBB\xBFxpath,notes\n/a,first\nsecond\n");

        assert_eq!(out.bytes, b"xpath,notes\n/a,first second\n");
        assert_eq!(out.edits, 2);
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(b"a,b\n"), Filtered::unchanged(b"a,b\n"));
    }

    #[test]
    fn lines_round_trip() {
        for input in [&b""[..], b"a", b"a\n", b"a\r\nb\r\n", b"a\n\nb"] {
            let (lines, trailing) = split_lines(input);
            let expected: Vec<u8> = input.iter().copied().filter(|b| *b != b'\r').collect();
            assert_eq!(join_lines(&lines, trailing), expected);
        }
    }
}
