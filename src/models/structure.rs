//! Input files and the project-structure summary built from them.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One file handed to the analyzer.
pub struct SourceFile {
    /// Base file name, e.g. `AndroidManifest.xml`.
    pub name: String,
    /// Path relative to the scanned root, using `/` separators.
    pub relative_path: Option<String>,
    /// Raw bytes; `None` when the file could not be read at all.
    pub content: Option<Vec<u8>>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        SourceFile {
            name: name.into(),
            relative_path: None,
            content: Some(content.into()),
        }
    }

    pub fn with_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    pub fn unreadable(name: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            relative_path: None,
            content: None,
        }
    }

    /// Relative path when known, else the bare name.
    pub fn path(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Buckets used when classifying the file set.
pub enum FileKind {
    Java,
    Kotlin,
    Xml,
    Manifest,
    Gradle,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Shape of the accepted file set; read-only once built.
pub struct ProjectStructure {
    pub total_files: usize,
    pub files_by_kind: BTreeMap<FileKind, Vec<String>>,
    pub folders: BTreeSet<String>,
}

impl ProjectStructure {
    pub fn files(&self, kind: FileKind) -> &[String] {
        self.files_by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, kind: FileKind) -> usize {
        self.files(kind).len()
    }
}
