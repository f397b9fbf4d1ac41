/// How many bytes of input are inspected when choosing a delimiter.
pub const SAMPLE_LEN: usize = 1024;

/// Delimiters considered, in order of preference.
pub const CANDIDATES: &[u8] = &[b',', b';', b'\t', b'|'];

/// How a [`Delimiter`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSource {
    /// Consistent column count across the sample
    Sniffed,

    /// First candidate that appears anywhere in the sample
    Probed,

    /// Nothing matched; fell back to comma
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub byte: u8,
    pub source: DelimiterSource,
}

impl Delimiter {
    /// Picks the delimiter for `content` from [`CANDIDATES`].
    pub fn detect(content: &str) -> Delimiter {
        Delimiter::detect_with(content, CANDIDATES)
    }

    /// Picks the delimiter for `content` from `candidates`.
    ///
    /// Sniffing looks for a candidate that occurs, outside quotes, the same
    /// non-zero number of times on every complete line of the sample. The
    /// most frequent such candidate wins; ties go to the earlier candidate.
    /// When sniffing fails, the first candidate present at all is used,
    /// and comma when none is.
    pub fn detect_with(content: &str, candidates: &[u8]) -> Delimiter {
        let (sample, truncated) = sample(content);

        if let Some(byte) = sniff(sample, truncated, candidates) {
            return Delimiter {
                byte,
                source: DelimiterSource::Sniffed,
            };
        }

        if let Some(&byte) = candidates.iter().find(|c| sample.as_bytes().contains(c)) {
            return Delimiter {
                byte,
                source: DelimiterSource::Probed,
            };
        }

        Delimiter {
            byte: b',',
            source: DelimiterSource::Default,
        }
    }
}

impl core::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.byte {
            b'\t' => f.write_str("tab"),
            byte => write!(f, "'{}'", byte as char),
        }
    }
}

fn sample(content: &str) -> (&str, bool) {
    if content.len() <= SAMPLE_LEN {
        return (content, false);
    }

    let mut end = SAMPLE_LEN;
    while !content.is_char_boundary(end) {
        end -= 1;
    }

    (&content[..end], true)
}

fn sniff(sample: &str, truncated: bool, candidates: &[u8]) -> Option<u8> {
    let mut lines: Vec<&str> = sample.lines().filter(|line| !line.trim().is_empty()).collect();

    // The sample cuts the last line short
    if truncated && lines.len() > 1 {
        lines.pop();
    }

    let (first, rest) = lines.split_first()?;
    let mut best: Option<(u8, usize)> = None;

    for &candidate in candidates {
        let count = count_unquoted(first, candidate);
        if count == 0 {
            continue;
        }

        if rest.iter().any(|line| count_unquoted(line, candidate) != count) {
            continue;
        }

        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((candidate, count));
        }
    }

    best.map(|(byte, _)| byte)
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut quoted = false;
    let mut count = 0;

    for &byte in line.as_bytes() {
        if byte == b'"' {
            quoted = !quoted;
        } else if byte == delimiter && !quoted {
            count += 1;
        }
    }

    count
}
