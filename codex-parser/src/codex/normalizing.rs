//! Statblock normalizer
//!
//!     Turns an arbitrary string-keyed yaml mapping (frontmatter, no schema) into a
//!     [`CreatureStatblock`]. The normalizer is total at the field level: a missing key, a
//!     value of the wrong shape or an out-of-range enum string resolves to a documented
//!     default, never to an error.
//!
//!     The single negative outcome is "not a creature": when the `statblock` discriminator is
//!     absent or false, [`normalize_statblock`] returns `None` and the caller skips the
//!     document (or treats it as lore).
//!
//!     Defaults
//!
//!         numeric modifiers, hp, level, speeds    0
//!         ac                                      10
//!         rarity                                  common
//!         size                                    med
//!         published                               false
//!         name                                    "Unnamed Creature"
//!
//!     Field groups are handled by small shape-dispatching functions, each converging on
//!     one canonical type. Groups that exist in both the array-of-single-key-objects and the
//!     flat-object shape go through [`shapes::keyed_entries`].

pub mod abilities;
pub mod coerce;
pub mod shapes;
pub mod skills;
pub mod spellcasting;
pub mod strikes;

use crate::codex::parsing::{parse_senses_string, parse_speed_string, slugify};
use crate::codex::statblock::{
    Abilities, AbilityMods, Acuity, CreatureStatblock, Defenses, Perception, Rarity, Saves, Sense,
    Size, Speed,
};
use coerce::{to_enum, to_flag, to_level, to_list, to_number, to_text};
use serde_yaml::{Mapping, Value};
use shapes::{field, keyed_entries};

/// Frontmatter key that marks a document as a creature.
pub const DISCRIMINATOR: &str = "statblock";

pub const DEFAULT_NAME: &str = "Unnamed Creature";

/// Whether a frontmatter mapping declares itself a creature statblock.
pub fn is_creature(map: &Mapping) -> bool {
    to_flag(map.get(DISCRIMINATOR))
}

/// Normalize one frontmatter mapping, or `None` when it is not a creature.
pub fn normalize_statblock(raw: &Value) -> Option<CreatureStatblock> {
    let map = raw.as_mapping()?;
    if !is_creature(map) {
        return None;
    }

    let (skills, lore) = skills::normalize_skills(field(map, &["skills"]));
    let statblock = CreatureStatblock {
        name: to_text(field(map, &["name"])).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        level: to_level(field(map, &["level"])),
        rarity: to_enum(field(map, &["rarity"]), Rarity::from_input, Rarity::Common),
        size: to_enum(field(map, &["size"]), Size::from_input, Size::Medium),
        traits: normalize_traits(field(map, &["traits"])),
        published: to_flag(field(map, &["published"])),
        ability_mods: normalize_ability_mods(field(map, &["abilityMods", "abilities"])),
        perception: normalize_perception(map),
        languages: to_list(field(map, &["languages"])),
        skills,
        lore,
        defenses: normalize_defenses(map),
        speed: normalize_speed(field(map, &["speed"])),
        strikes: strikes::normalize_strikes(field(map, &["strikes", "attacks"])),
        abilities: Abilities {
            top: abilities::normalize_abilities(field(map, &["abilities_top"])),
            mid: abilities::normalize_abilities(field(map, &["abilities_mid"])),
            bottom: abilities::normalize_abilities(field(map, &["abilities_bot", "abilities_bottom"])),
        },
        spellcasting: spellcasting::normalize_spellcasting(field(map, &["spellcasting"])),
        items: to_text(field(map, &["items"])),
        source: to_text(field(map, &["source"])),
    };

    tracing::debug!(
        name = %statblock.name,
        level = statblock.level,
        strikes = statblock.strikes.len(),
        "normalized statblock"
    );
    Some(statblock)
}

/// Trait slugs, in authored order, without duplicates.
fn normalize_traits(value: Option<&Value>) -> Vec<String> {
    let mut traits: Vec<String> = Vec::new();
    for slug in to_list(value).iter().map(|t| slugify(t)) {
        if !slug.is_empty() && !traits.contains(&slug) {
            traits.push(slug);
        }
    }
    traits
}

/// Keys match on their first three letters, so `str` and `Strength` are the same entry.
fn normalize_ability_mods(value: Option<&Value>) -> AbilityMods {
    let mut mods = AbilityMods::default();
    for (key, value) in keyed_entries(value) {
        let key = key.to_lowercase();
        let slot = match key.get(..3) {
            Some("str") => &mut mods.str,
            Some("dex") => &mut mods.dex,
            Some("con") => &mut mods.con,
            Some("int") => &mut mods.int,
            Some("wis") => &mut mods.wis,
            Some("cha") => &mut mods.cha,
            _ => continue,
        };
        *slot = to_number(Some(value), 0);
    }
    mods
}

fn normalize_saves(value: Option<&Value>) -> Saves {
    let mut saves = Saves::default();
    for (key, value) in keyed_entries(value) {
        match key.to_lowercase().as_str() {
            "fort" | "fortitude" => saves.fortitude = to_number(Some(value), 0),
            "ref" | "reflex" => saves.reflex = to_number(Some(value), 0),
            "will" => saves.will = to_number(Some(value), 0),
            "note" | "notes" | "details" => saves.note = to_text(Some(value)),
            _ => {}
        }
    }
    saves
}

/// Perception is a bare modifier or an object `{mod, senses, note}`; top-level `senses`
/// are appended after the object's own.
fn normalize_perception(map: &Mapping) -> Perception {
    let mut perception = match field(map, &["perception"]) {
        Some(Value::Mapping(inner)) => Perception {
            modifier: to_number(field(inner, &["mod", "value"]), 0),
            senses: normalize_senses(field(inner, &["senses"])),
            note: to_text(field(inner, &["note", "details"])),
        },
        other => Perception {
            modifier: to_number(other, 0),
            ..Perception::default()
        },
    };
    perception
        .senses
        .extend(normalize_senses(field(map, &["senses"])));
    perception
}

/// Senses from a delimited string or a list of strings and pre-structured objects.
pub fn normalize_senses(value: Option<&Value>) -> Vec<Sense> {
    match value {
        Some(Value::String(s)) => parse_senses_string(s),
        Some(Value::Sequence(items)) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(s) => parse_senses_string(s),
                Value::Mapping(sense) => sense_from_mapping(sense).into_iter().collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn sense_from_mapping(map: &Mapping) -> Option<Sense> {
    let kind = to_text(field(map, &["type", "name"]))?;
    Some(Sense {
        kind: slugify(&kind),
        acuity: to_text(field(map, &["acuity"])).and_then(|a| Acuity::from_input(&a)),
        range: field(map, &["range"]).map(|r| to_number(Some(r), 0)),
    })
}

/// A defense value is a scalar or `{value, note}`.
fn value_and_note(value: Option<&Value>, fallback: i64) -> (i64, Option<String>) {
    match value {
        Some(Value::Mapping(inner)) => (
            to_number(field(inner, &["value"]), fallback),
            to_text(field(inner, &["note", "details"])),
        ),
        other => (to_number(other, fallback), None),
    }
}

fn normalize_defenses(map: &Mapping) -> Defenses {
    let (ac, ac_note) = value_and_note(field(map, &["ac"]), 10);
    let (hp, hp_note) = value_and_note(field(map, &["hp"]), 0);
    Defenses {
        ac,
        ac_note,
        saves: normalize_saves(field(map, &["saves"])),
        hp,
        hp_note,
        immunities: to_text(field(map, &["immunities"])),
        resistances: to_text(field(map, &["resistances"])),
        weaknesses: to_text(field(map, &["weaknesses"])),
    }
}

/// Speed as a bare land value, a speed string, or the legacy object shape.
pub fn normalize_speed(value: Option<&Value>) -> Speed {
    match value {
        Some(Value::Number(_)) => Speed {
            land: to_number(value, 0),
            ..Speed::default()
        },
        Some(Value::String(s)) => parse_speed_string(s),
        Some(Value::Mapping(map)) => {
            let optional = |keys: &[&str]| field(map, keys).map(|v| to_number(Some(v), 0));
            Speed {
                land: to_number(field(map, &["land", "value", "walk"]), 0),
                fly: optional(&["fly"]),
                swim: optional(&["swim"]),
                climb: optional(&["climb"]),
                burrow: optional(&["burrow"]),
                note: to_text(field(map, &["note", "details"])),
            }
        }
        _ => Speed::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_not_a_creature() {
        assert!(normalize_statblock(&yaml("{name: Sandpoint}")).is_none());
        assert!(normalize_statblock(&yaml("{statblock: false, name: x}")).is_none());
        assert!(normalize_statblock(&yaml("just text")).is_none());
    }

    #[test]
    fn test_minimal_creature_defaults() {
        let statblock = normalize_statblock(&yaml("{statblock: true}")).unwrap();
        assert_eq!(statblock.name, DEFAULT_NAME);
        assert_eq!(statblock.level, 0);
        assert_eq!(statblock.rarity, Rarity::Common);
        assert_eq!(statblock.size, Size::Medium);
        assert_eq!(statblock.defenses.ac, 10);
        assert_eq!(statblock.defenses.hp, 0);
        assert_eq!(statblock.speed.land, 0);
        assert!(!statblock.published);
    }

    #[test]
    fn test_traits_are_slugs_without_duplicates() {
        let traits = normalize_traits(Some(&yaml("[Goblin, Humanoid, goblin, 'Half Elf']")));
        assert_eq!(traits, vec!["goblin", "humanoid", "half-elf"]);
    }

    #[test]
    fn test_ability_mod_long_names() {
        let mods = normalize_ability_mods(Some(&yaml("{Strength: 4, dexterity: -1, Cha: 2}")));
        assert_eq!(mods.str, 4);
        assert_eq!(mods.dex, -1);
        assert_eq!(mods.cha, 2);
        assert_eq!(mods.wis, 0);
    }

    #[test]
    fn test_perception_object_and_top_level_senses() {
        let raw = yaml("{perception: {mod: 7, senses: darkvision}, senses: [{type: Scent, acuity: imprecise, range: 30}]}");
        let perception = normalize_perception(raw.as_mapping().unwrap());
        assert_eq!(perception.modifier, 7);
        assert_eq!(
            perception.senses,
            vec![
                Sense::bare("darkvision"),
                Sense {
                    kind: "scent".to_string(),
                    acuity: Some(Acuity::Imprecise),
                    range: Some(30),
                },
            ]
        );
    }

    #[test]
    fn test_speed_shapes() {
        assert_eq!(normalize_speed(Some(&yaml("35"))).land, 35);
        assert_eq!(normalize_speed(Some(&yaml("'20 feet, climb 20 feet'"))).climb, Some(20));
        let legacy = normalize_speed(Some(&yaml("{value: 30, fly: 40, details: hover}")));
        assert_eq!(legacy.land, 30);
        assert_eq!(legacy.fly, Some(40));
        assert_eq!(legacy.swim, None);
        assert_eq!(legacy.note.as_deref(), Some("hover"));
        assert_eq!(normalize_speed(None), Speed::default());
    }

    #[test]
    fn test_defense_notes() {
        let raw = yaml("{ac: {value: 18, note: with shield raised 20}, hp: 45, saves: [{fort: 9}, {ref: 6}, {will: 4}, {note: +1 vs magic}]}");
        let defenses = normalize_defenses(raw.as_mapping().unwrap());
        assert_eq!(defenses.ac, 18);
        assert_eq!(defenses.ac_note.as_deref(), Some("with shield raised 20"));
        assert_eq!(defenses.hp, 45);
        assert_eq!(defenses.saves.fortitude, 9);
        assert_eq!(defenses.saves.note.as_deref(), Some("+1 vs magic"));
    }
}
