//! Compendium documents
//!
//! Creatures become `npc` actors with embedded items, lore notes become journal entries.
//! See `crate::builders` for the document layouts.
//!
//! ## Example
//!
//! ```text
//! {
//!   "_id": "3f0c9a51d2e47b68",
//!   "name": "Goblin Warrior",
//!   "type": "npc",
//!   "system": { "abilities": { "str": { "mod": 0 }, ... }, ... },
//!   "items": [ { "_id": "...", "name": "dogslicer", "type": "melee", "sort": 100000, ... } ]
//! }
//! ```

use crate::builders::{build_actor, build_journal, BuildContext};
use crate::error::FormatError;
use crate::format::Format;
use codex_parser::codex::transforms::stages::VaultEntry;
use serde_json::Value;

/// Format implementation for compendium actors and journals
pub struct FoundryFormat;

impl Format for FoundryFormat {
    fn name(&self) -> &str {
        "foundry"
    }

    fn description(&self) -> &str {
        "Compendium actor and journal documents"
    }

    fn serialize(&self, entry: &VaultEntry, ctx: &BuildContext) -> Result<Value, FormatError> {
        match entry {
            VaultEntry::Creature { statblock, body } => {
                Ok(serde_json::to_value(build_actor(statblock, body, ctx))?)
            }
            VaultEntry::Lore { title, body, .. } => {
                Ok(serde_json::to_value(build_journal(title, body, ctx))?)
            }
        }
    }
}
