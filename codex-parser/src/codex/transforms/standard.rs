//! Standard transform definitions
//!
//! Pre-built chains for the common loading paths, as `once_cell::sync::Lazy` statics.

use crate::codex::transforms::stages::{
    ClassifyEntry, ParseFrontmatter, RawDocument, SourceParts, SplitFrontmatter, VaultEntry,
};
use crate::codex::transforms::Transform;
use once_cell::sync::Lazy;

pub type SplitTransform = Transform<String, SourceParts>;
pub type DocumentTransform = Transform<String, RawDocument>;
pub type EntryTransform = Transform<String, VaultEntry>;

/// String → SourceParts
pub static SPLIT_FRONTMATTER: Lazy<SplitTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(SplitFrontmatter::new()));

/// String → RawDocument: frontmatter split and parsed, body untouched.
pub static STRING_TO_DOCUMENT: Lazy<DocumentTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(SplitFrontmatter::new())
        .then(ParseFrontmatter::new())
});

/// String → VaultEntry: the full path from note text to a classified entry.
///
/// # Example
///
/// ```rust,ignore
/// use codex_parser::codex::transforms::standard::STRING_TO_ENTRY;
///
/// let entry = STRING_TO_ENTRY.run("---\nstatblock: true\n---\n".to_string())?;
/// assert!(entry.is_creature());
/// ```
pub static STRING_TO_ENTRY: Lazy<EntryTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&STRING_TO_DOCUMENT)
        .then(ClassifyEntry::new())
});
