//! Entry classification
//!
//! A note is a creature when its frontmatter normalizes to a statblock, and lore (a plain
//! journal page) otherwise. Lore titles come from the `title` or `name` key, then the first
//! `# ` heading of the body.

use crate::codex::normalizing::coerce::{to_flag, to_text};
use crate::codex::normalizing::shapes::field;
use crate::codex::normalizing::{is_creature, normalize_statblock};
use crate::codex::statblock::CreatureStatblock;
use crate::codex::transforms::stages::frontmatter::RawDocument;
use crate::codex::transforms::{Runnable, TransformError};
use serde_yaml::Value;

pub const UNTITLED: &str = "Untitled";

/// One classified vault note.
#[derive(Debug, Clone, PartialEq)]
pub enum VaultEntry {
    Creature {
        statblock: Box<CreatureStatblock>,
        body: String,
    },
    Lore {
        title: String,
        published: bool,
        body: String,
    },
}

impl VaultEntry {
    /// Display name: the creature name or the lore title.
    pub fn name(&self) -> &str {
        match self {
            VaultEntry::Creature { statblock, .. } => &statblock.name,
            VaultEntry::Lore { title, .. } => title,
        }
    }

    pub fn published(&self) -> bool {
        match self {
            VaultEntry::Creature { statblock, .. } => statblock.published,
            VaultEntry::Lore { published, .. } => *published,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            VaultEntry::Creature { body, .. } | VaultEntry::Lore { body, .. } => body,
        }
    }

    pub fn is_creature(&self) -> bool {
        matches!(self, VaultEntry::Creature { .. })
    }
}

/// `RawDocument → VaultEntry`
///
/// With a fallback name (the loader passes the file stem) a creature without `name` and a
/// lore note without any title take that name instead of the defaults.
#[derive(Debug, Clone, Default)]
pub struct ClassifyEntry {
    fallback_name: Option<String>,
}

impl ClassifyEntry {
    pub fn new() -> Self {
        ClassifyEntry::default()
    }

    pub fn with_fallback_name(name: impl Into<String>) -> Self {
        ClassifyEntry {
            fallback_name: Some(name.into()),
        }
    }
}

impl Runnable<RawDocument, VaultEntry> for ClassifyEntry {
    fn run(&self, input: RawDocument) -> Result<VaultEntry, TransformError> {
        let RawDocument {
            mut frontmatter,
            body,
        } = input;

        if let Some(fallback) = &self.fallback_name {
            if !frontmatter.contains_key("name") && is_creature(&frontmatter) {
                frontmatter.insert(Value::from("name"), Value::from(fallback.as_str()));
            }
        }

        let raw = Value::Mapping(frontmatter);
        if let Some(statblock) = normalize_statblock(&raw) {
            tracing::debug!(name = %statblock.name, "classified as creature");
            return Ok(VaultEntry::Creature {
                statblock: Box::new(statblock),
                body,
            });
        }

        let map = raw.as_mapping();
        let title = map
            .and_then(|m| to_text(field(m, &["title", "name"])))
            .or_else(|| first_heading(&body))
            .or_else(|| self.fallback_name.clone())
            .unwrap_or_else(|| UNTITLED.to_string());
        let published = map.is_some_and(|m| to_flag(m.get("published")));
        tracing::debug!(%title, "classified as lore");
        Ok(VaultEntry::Lore {
            title,
            published,
            body,
        })
    }
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}
