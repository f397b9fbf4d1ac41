use super::{join_lines, split_lines, Filter, Filtered};

/// Words whose presence marks a line as a header row.
const HEADER_TERMS: &[&[u8]] = &[b"xpath", b"required", b"optional", b"data_type", b"model"];

/// Joins rows that an export wrapped across several physical lines.
///
/// A line starts a new row when it is the first line, is blank, starts with
/// `/`, or mentions a header term. Any other line is appended to the
/// previous one after a single space. Each joined line counts as one edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejoinLines;

impl Filter for RejoinLines {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn apply(&self, input: &[u8]) -> Filtered {
        let (lines, trailing_newline) = split_lines(input);
        let mut out: Vec<Vec<u8>> = Vec::with_capacity(lines.len());
        let mut edits = 0;

        for line in lines {
            let trimmed = line.trim_ascii();

            if !starts_row(trimmed) {
                if let Some(previous) = out.last_mut() {
                    previous.push(b' ');
                    previous.extend_from_slice(trimmed);
                    edits += 1;
                    continue;
                }
            }

            out.push(line.to_vec());
        }

        if edits == 0 {
            return Filtered::unchanged(input);
        }

        Filtered {
            bytes: join_lines(&out, trailing_newline),
            edits,
        }
    }
}

fn starts_row(trimmed: &[u8]) -> bool {
    if trimmed.is_empty() || trimmed.starts_with(b"/") {
        return true;
    }

    let lower = trimmed.to_ascii_lowercase();
    HEADER_TERMS
        .iter()
        .any(|term| lower.windows(term.len()).any(|window| window == *term))
}
