use indexmap::IndexSet;

/// Marker values that keep a row out of a model.
pub const DEFAULT_SKIP_MARKERS: &[&str] = &[
    "do not use",
    "skip",
    "ignore",
    "exclude",
    "n/a",
    "na",
    "null",
    "none",
    "-",
    "",
];

/// Required-status values that mark a field as required.
pub const REQUIRED_TOKENS: &[&str] = &["required", "true", "yes", "1"];

/// The exclusion set consulted by the model field selector.
///
/// Matching is case- and whitespace-insensitive. A blank marker is always
/// excluded, whatever the configured set.
#[derive(Debug, Clone)]
pub struct SkipMarkers {
    markers: IndexSet<String>,
}

impl Default for SkipMarkers {
    fn default() -> Self {
        SkipMarkers::new(DEFAULT_SKIP_MARKERS.iter().copied())
    }
}

impl SkipMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: IndexSet<String> = markers
            .into_iter()
            .map(|marker| normalize(marker.as_ref()))
            .collect();
        set.insert(String::new());

        Self { markers: set }
    }

    pub fn is_excluded(&self, marker: &str) -> bool {
        self.markers.contains(&normalize(marker))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

/// Returns `true` if a free-text required/optional value means "required".
///
/// Anything unrecognized, including blank, reads as optional.
pub fn is_required(status: &str) -> bool {
    let status = normalize(status);
    REQUIRED_TOKENS.contains(&status.as_str())
}

fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
