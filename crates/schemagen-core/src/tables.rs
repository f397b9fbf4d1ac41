use crate::ingest::Encodings;
use crate::schema::{SkipMarkers, TypeTable};

/// Fixed lookup data consulted while interpreting a schema table.
///
/// The built-in tables are available through [`Default`]. Callers that
/// need different synonyms, markers or encodings construct their own value
/// and pass it down; nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Type synonyms used by the type mapper
    pub types: TypeTable,

    /// Marker values that exclude a row from a model
    pub skip_markers: SkipMarkers,

    /// Encodings tried after UTF-8 fails
    pub encodings: Encodings,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(mut self, types: TypeTable) -> Self {
        self.types = types;
        self
    }

    pub fn skip_markers(mut self, skip_markers: SkipMarkers) -> Self {
        self.skip_markers = skip_markers;
        self
    }

    pub fn encodings(mut self, encodings: Encodings) -> Self {
        self.encodings = encodings;
        self
    }
}
