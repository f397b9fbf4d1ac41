use std::path::{Path, PathBuf};

/// Generated files, in generation order.
#[derive(Debug, Default)]
pub struct Output {
    pub files: Vec<GeneratedFile>,
}

/// A single generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: PathBuf,

    pub contents: String,
}

impl Output {
    pub fn push(&mut self, file: GeneratedFile) {
        tracing::debug!(path = %file.path.display(), bytes = file.contents.len(), "generated file");
        self.files.push(file);
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|file| file.path == path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}
