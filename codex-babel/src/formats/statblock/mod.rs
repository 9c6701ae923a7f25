//! Normalized statblocks as json
//!
//! The canonical CreatureStatblock serialized as is (camelCase keys). Useful for checking
//! what the normalizer made of a note. Lore entries have no statblock and are rejected.

use crate::builders::BuildContext;
use crate::error::FormatError;
use crate::format::Format;
use codex_parser::codex::transforms::stages::VaultEntry;
use serde_json::Value;

pub struct StatblockFormat;

impl Format for StatblockFormat {
    fn name(&self) -> &str {
        "statblock"
    }

    fn description(&self) -> &str {
        "Normalized creature statblock"
    }

    fn serialize(&self, entry: &VaultEntry, _ctx: &BuildContext) -> Result<Value, FormatError> {
        match entry {
            VaultEntry::Creature { statblock, .. } => Ok(serde_json::to_value(statblock)?),
            VaultEntry::Lore { title, .. } => Err(FormatError::NotSupported(format!(
                "'{}' is a lore note, not a statblock",
                title
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_parser::codex::normalizing::normalize_statblock;

    #[test]
    fn test_creature_statblock() {
        let statblock = normalize_statblock(
            &serde_yaml::from_str("{statblock: true, name: Goblin Warrior, size: small}").unwrap(),
        )
        .unwrap();
        let entry = VaultEntry::Creature {
            statblock: Box::new(statblock),
            body: String::new(),
        };
        let value = StatblockFormat
            .serialize(&entry, &BuildContext::default())
            .unwrap();
        assert_eq!(value["name"], "Goblin Warrior");
        assert_eq!(value["size"], "sm");
        assert_eq!(value["rarity"], "common");
    }

    #[test]
    fn test_lore_not_supported() {
        let entry = VaultEntry::Lore {
            title: "Sandpoint".to_string(),
            published: true,
            body: String::new(),
        };
        match StatblockFormat.serialize(&entry, &BuildContext::default()) {
            Err(FormatError::NotSupported(message)) => assert!(message.contains("Sandpoint")),
            other => panic!("Expected NotSupported error, got {:?}", other),
        }
    }
}
