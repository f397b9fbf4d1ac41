use super::{join_lines, split_lines, Filter, Filtered};

use regex::bytes::{Captures, Regex};
use std::sync::LazyLock;

static TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"""""#).expect("triple quote pattern is valid"));
static DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""""#).expect("double quote pattern is valid"));
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*""#).expect("quoted span pattern is valid"));

/// Flattens quoting so the file parses with any reader.
///
/// In order: `"""` and then `""` become a single `"`, commas inside quoted
/// spans become `;`, and a line wrapped in exactly one pair of quotes loses
/// them. Every replacement counts as one edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanQuotes;

impl Filter for CleanQuotes {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn apply(&self, input: &[u8]) -> Filtered {
        let mut edits = 0;

        let mut bytes = replace_counting(&TRIPLE, input.to_vec(), b"\"", &mut edits);
        bytes = replace_counting(&DOUBLE, bytes, b"\"", &mut edits);

        let mut commas = 0;
        bytes = QUOTED
            .replace_all(&bytes, |caps: &Captures| {
                let span = &caps[0];
                let count = span.iter().filter(|b| **b == b',').count();
                commas += count;
                span.iter()
                    .map(|b| if *b == b',' { b';' } else { *b })
                    .collect::<Vec<u8>>()
            })
            .into_owned();
        edits += commas;

        let (lines, trailing_newline) = split_lines(&bytes);
        let lines: Vec<&[u8]> = lines
            .into_iter()
            .map(|line| match unwrap_line(line) {
                Some(inner) => {
                    edits += 1;
                    inner
                }
                None => line,
            })
            .collect();

        if edits == 0 {
            return Filtered::unchanged(input);
        }

        Filtered {
            bytes: join_lines(&lines, trailing_newline),
            edits,
        }
    }
}

fn replace_counting(pattern: &Regex, bytes: Vec<u8>, with: &[u8], edits: &mut usize) -> Vec<u8> {
    let count = pattern.find_iter(&bytes).count();
    if count == 0 {
        return bytes;
    }

    *edits += count;
    pattern.replace_all(&bytes, with).into_owned()
}

fn unwrap_line(line: &[u8]) -> Option<&[u8]> {
    let quotes = line.iter().filter(|b| **b == b'"').count();
    if quotes != 2 || line.len() < 2 {
        return None;
    }

    line.strip_prefix(b"\"")?.strip_suffix(b"\"")
}
