//! Strikes
//!
//!     A strike entry is an object with its parts in separate keys:
//!
//!         - name: __Melee__ ⬻ jaws
//!           bonus: 12
//!           traits: (agile, magical)
//!           damage: 2d6+4 piercing plus Grab
//!
//!     or the compact form, where one `desc` line holds bonus, traits and damage:
//!
//!         - name: __Melee__ ⬻ jaws
//!           desc: +12 (agile, magical), __Damage__ 2d6+4 piercing plus Grab
//!
//!     Explicit keys win over the parts found in `desc`.

use super::coerce::{to_list, to_number, to_text};
use super::shapes::field;
use crate::codex::parsing::{
    parse_attack_desc, parse_attack_name, parse_damage_string, AttackDescription, DamageParse,
};
use crate::codex::statblock::{AttackType, Strike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

static COMPACT_DESC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?P<bonus>[+-]?\d+)\b)?\s*(?P<traits>\([^)]*\))?\s*,?\s*(?:__damage__|\*\*damage\*\*|damage)?\s*(?P<damage>.*?)\s*$",
    )
    .unwrap()
});

/// The parts of a compact `desc` line.
#[derive(Debug, Default, PartialEq)]
struct CompactDesc<'a> {
    bonus: Option<i64>,
    traits: Option<&'a str>,
    damage: Option<&'a str>,
}

fn split_compact_desc(desc: &str) -> CompactDesc<'_> {
    let Some(caps) = COMPACT_DESC.captures(desc) else {
        return CompactDesc::default();
    };
    CompactDesc {
        bonus: caps
            .name("bonus")
            .and_then(|m| m.as_str().trim_start_matches('+').parse().ok()),
        traits: caps.name("traits").map(|m| m.as_str()),
        damage: caps
            .name("damage")
            .map(|m| m.as_str())
            .filter(|d| !d.is_empty()),
    }
}

/// Normalize a strike list. A single object is accepted as a one-strike list.
pub fn normalize_strikes(value: Option<&Value>) -> Vec<Strike> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_mapping)
            .map(normalize_strike)
            .collect(),
        Some(Value::Mapping(map)) => vec![normalize_strike(map)],
        _ => Vec::new(),
    }
}

fn normalize_strike(map: &Mapping) -> Strike {
    let authored_name = to_text(field(map, &["name"])).unwrap_or_default();
    let parsed_name = parse_attack_name(&authored_name);
    let attack_type = to_text(field(map, &["type"]))
        .and_then(|t| AttackType::from_input(&t))
        .unwrap_or(parsed_name.attack_type);

    let desc_text = to_text(field(map, &["desc", "description"])).unwrap_or_default();
    let compact = split_compact_desc(&desc_text);

    let bonus = match field(map, &["bonus", "attack"]) {
        Some(value) => to_number(Some(value), compact.bonus.unwrap_or(0)),
        None => compact.bonus.unwrap_or(0),
    };

    let description = match field(map, &["traits"]) {
        Some(Value::Sequence(_)) => parse_attack_desc(&to_list(field(map, &["traits"])).join(", ")),
        Some(other) => parse_attack_desc(&to_text(Some(other)).unwrap_or_default()),
        None => compact
            .traits
            .map(parse_attack_desc)
            .unwrap_or_else(AttackDescription::default),
    };

    let mut damage = DamageParse::default();
    match field(map, &["damage"]) {
        Some(Value::Sequence(items)) => {
            for item in items {
                if let Some(text) = to_text(Some(item)) {
                    damage.extend(parse_damage_string(&text));
                }
            }
        }
        Some(other) => {
            if let Some(text) = to_text(Some(other)) {
                damage.extend(parse_damage_string(&text));
            }
        }
        None => {
            if let Some(text) = compact.damage {
                damage.extend(parse_damage_string(text));
            }
        }
    }
    damage.effects.extend(to_list(field(map, &["effects"])));

    Strike {
        name: parsed_name.name,
        attack_type,
        bonus,
        traits: description.traits,
        damage: damage.damage,
        effects: damage.effects,
        action: description.action,
        area: description.area,
        range: description.range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codex::statblock::{DamageRoll, StrikeAction};

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_split_compact_desc() {
        let parts = split_compact_desc("+12 (agile, magical), __Damage__ 2d6+4 piercing plus Grab");
        assert_eq!(
            parts,
            CompactDesc {
                bonus: Some(12),
                traits: Some("(agile, magical)"),
                damage: Some("2d6+4 piercing plus Grab"),
            }
        );
    }

    #[test]
    fn test_split_compact_desc_without_traits() {
        let parts = split_compact_desc("-1, **Damage** 1d4 bludgeoning");
        assert_eq!(parts.bonus, Some(-1));
        assert_eq!(parts.traits, None);
        assert_eq!(parts.damage, Some("1d4 bludgeoning"));
    }

    #[test]
    fn test_split_compact_desc_damage_only() {
        let parts = split_compact_desc("2d6 fire");
        assert_eq!(parts.bonus, None);
        assert_eq!(parts.damage, Some("2d6 fire"));
    }

    #[test]
    fn test_explicit_keys() {
        let strikes = normalize_strikes(Some(&yaml(
            r#"
- name: __Ranged__ ⬻ Hand Crossbow
  bonus: 9
  traits: [Crossbow, range increment 60 feet]
  damage: 1d6 piercing
"#,
        )));
        assert_eq!(strikes.len(), 1);
        let strike = &strikes[0];
        assert_eq!(strike.name, "Hand Crossbow");
        assert_eq!(strike.attack_type, AttackType::Ranged);
        assert_eq!(strike.bonus, 9);
        assert_eq!(strike.traits, vec!["crossbow"]);
        assert_eq!(strike.range.and_then(|r| r.increment), Some(60));
        assert_eq!(strike.damage, vec![DamageRoll::new("1d6", "piercing")]);
    }

    #[test]
    fn test_compact_desc_fills_missing_parts() {
        let strikes = normalize_strikes(Some(&yaml(
            r#"
- name: __Melee__ ⬻ jaws
  desc: +12 (agile, magical), __Damage__ 2d6+4 piercing plus Grab
"#,
        )));
        let strike = &strikes[0];
        assert_eq!(strike.bonus, 12);
        assert_eq!(strike.traits, vec!["agile", "magical"]);
        assert_eq!(strike.damage, vec![DamageRoll::new("2d6+4", "piercing")]);
        assert_eq!(strike.effects, vec!["Grab"]);
    }

    #[test]
    fn test_explicit_type_and_action_override() {
        let strikes = normalize_strikes(Some(&yaml(
            "{name: flamethrower, type: ranged, bonus: '+10', traits: '(area-fire, cone 30 feet)', damage: [2d6 fire, 1d4 persistent fire]}",
        )));
        let strike = &strikes[0];
        assert_eq!(strike.attack_type, AttackType::Ranged);
        assert_eq!(strike.bonus, 10);
        assert_eq!(strike.action, Some(StrikeAction::AreaFire));
        assert!(strike.area.is_some());
        assert_eq!(strike.damage.len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let strikes = normalize_strikes(Some(&yaml("[{name: fist}]")));
        assert_eq!(strikes[0].bonus, 0);
        assert!(strikes[0].damage.is_empty());
        assert!(strikes[0].traits.is_empty());
    }
}
