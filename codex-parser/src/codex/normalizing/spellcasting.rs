//! Spellcasting entries

use super::coerce::{key_text, to_enum, to_list, to_number, to_text};
use super::shapes::field;
use crate::codex::parsing::{capitalize, first_signed_int};
use crate::codex::statblock::{CastingType, SpellRank, Spellcasting, Tradition};
use serde_yaml::{Mapping, Value};

pub fn normalize_spellcasting(value: Option<&Value>) -> Vec<Spellcasting> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_mapping)
            .map(normalize_entry)
            .collect(),
        Some(Value::Mapping(map)) => vec![normalize_entry(map)],
        _ => Vec::new(),
    }
}

fn normalize_entry(map: &Mapping) -> Spellcasting {
    let tradition = to_text(field(map, &["tradition"])).and_then(|t| Tradition::from_input(&t));
    let casting = to_enum(
        field(map, &["type", "casting", "prepared"]),
        CastingType::from_input,
        CastingType::Innate,
    );
    let name = to_text(field(map, &["name"])).unwrap_or_else(|| {
        let tradition = tradition.map(|t| capitalize(t.as_str())).unwrap_or_default();
        format!("{} {} Spells", tradition, capitalize(casting.as_str()))
            .trim()
            .to_string()
    });

    let ranks = match field(map, &["spells"]) {
        Some(Value::Mapping(spells)) => spells
            .iter()
            .filter_map(|(key, value)| {
                let rank = spell_rank(&key_text(key)?)?;
                let spells = to_list(Some(value));
                (!spells.is_empty()).then_some(SpellRank { rank, spells })
            })
            .collect(),
        _ => Vec::new(),
    };

    Spellcasting {
        name,
        tradition,
        casting,
        dc: to_number(field(map, &["dc"]), 0),
        attack: to_number(field(map, &["attack"]), 0),
        ranks,
    }
}

/// `cantrips` → 0, otherwise the first integer in the key (`1st`, `rank 3`, `5`).
fn spell_rank(key: &str) -> Option<u8> {
    if key.trim().to_lowercase().starts_with("cantrip") {
        return Some(0);
    }
    first_signed_int(key).and_then(|n| u8::try_from(n).ok())
}
