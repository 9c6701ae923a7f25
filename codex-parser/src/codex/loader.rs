//! Document loading utilities
//!
//! `DocumentLoader` loads note text from a file or a string and runs transforms on it. It is
//! the entry point for the CLI as well as the tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use codex_parser::codex::loader::DocumentLoader;
//!
//! let entry = DocumentLoader::from_path("vault/Bestiary/Goblin Warrior.md")?.entry()?;
//! println!("{}", entry.name());
//! ```

use crate::codex::transforms::stages::{ClassifyEntry, RawDocument, VaultEntry};
use crate::codex::transforms::standard::STRING_TO_DOCUMENT;
use crate::codex::transforms::{Runnable, Transform, TransformError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Note loader with transform shortcuts.
pub struct DocumentLoader {
    source: String,
    stem: Option<String>,
}

impl DocumentLoader {
    /// Load from a file path. The file stem becomes the fallback entry name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Ok(DocumentLoader { source, stem })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            stem: None,
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Split and parse the frontmatter.
    pub fn document(&self) -> Result<RawDocument, LoaderError> {
        self.with(&STRING_TO_DOCUMENT)
    }

    /// Load and classify the note.
    pub fn entry(&self) -> Result<VaultEntry, LoaderError> {
        let classify = match &self.stem {
            Some(stem) => ClassifyEntry::with_fallback_name(stem.as_str()),
            None => ClassifyEntry::new(),
        };
        Ok(classify.run(self.document()?)?)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The file stem, when loaded from a path.
    pub fn stem(&self) -> Option<&str> {
        self.stem.as_deref()
    }
}
