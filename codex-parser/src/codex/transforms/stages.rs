//! Individual transformation stages
//!
//! Each stage implements [`Runnable`](super::Runnable) and can be run on its own or chained.

pub mod classify;
pub mod frontmatter;

pub use classify::{ClassifyEntry, VaultEntry};
pub use frontmatter::{ParseFrontmatter, RawDocument, SourceParts, SplitFrontmatter};
