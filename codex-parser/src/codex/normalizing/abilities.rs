//! Special abilities
//!
//!     An ability group (`abilities_top`, `abilities_mid`, `abilities_bot`) is a list of
//!     records `{name, desc, traits, category}`, or the older keyed forms where the name is
//!     the key and the value the description:
//!
//!         abilities_mid: [{Ferocity: "..."}]
//!         abilities_mid: {Ferocity: "..."}

use super::coerce::{to_list, to_text};
use super::shapes::{field, mapping_entries};
use crate::codex::parsing::extract_action_glyph;
use crate::codex::statblock::{Ability, AbilityCategory};
use serde_yaml::{Mapping, Value};

pub fn normalize_abilities(value: Option<&Value>) -> Vec<Ability> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_mapping)
            .flat_map(|map| {
                if field(map, &["name"]).is_some() {
                    vec![ability_from_record(map)]
                } else {
                    keyed_abilities(map)
                }
            })
            .collect(),
        Some(Value::Mapping(map)) => keyed_abilities(map),
        _ => Vec::new(),
    }
}

fn keyed_abilities(map: &Mapping) -> Vec<Ability> {
    mapping_entries(map)
        .into_iter()
        .map(|(name, value)| match value.as_mapping() {
            Some(record) => build_ability(&name, record),
            None => build_ability_text(&name, to_text(Some(value)).unwrap_or_default()),
        })
        .collect()
}

fn ability_from_record(map: &Mapping) -> Ability {
    let name = to_text(field(map, &["name"])).unwrap_or_default();
    build_ability(&name, map)
}

fn build_ability(name: &str, record: &Mapping) -> Ability {
    let mut ability = build_ability_text(
        name,
        to_text(field(record, &["desc", "description"])).unwrap_or_default(),
    );

    let traits: Vec<String> = to_list(field(record, &["traits"]))
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();
    ability.traits = (!traits.is_empty()).then_some(traits);
    ability.category = to_text(field(record, &["category"]))
        .and_then(|c| AbilityCategory::from_input(&c));
    ability
}

fn build_ability_text(name: &str, description: String) -> Ability {
    let (name, actions) = extract_action_glyph(name);
    Ability {
        name,
        description,
        traits: None,
        category: None,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codex::statblock::ActionCost;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_record_shape() {
        let abilities = normalize_abilities(Some(&yaml(
            r#"
- name: Breath Weapon ⬺
  desc: The dragon breathes fire in a 30-foot cone.
  traits: [Arcane, Fire]
  category: Offensive
"#,
        )));
        assert_eq!(abilities.len(), 1);
        let ability = &abilities[0];
        assert_eq!(ability.name, "Breath Weapon");
        assert_eq!(ability.actions, Some(ActionCost::Two));
        assert_eq!(
            ability.traits,
            Some(vec!["arcane".to_string(), "fire".to_string()])
        );
        assert_eq!(ability.category, Some(AbilityCategory::Offensive));
    }

    #[test]
    fn test_keyed_shapes_match() {
        let array = normalize_abilities(Some(&yaml("[{Ferocity: Keeps fighting.}, {Scent: Smells.}]")));
        let flat = normalize_abilities(Some(&yaml("{Ferocity: Keeps fighting., Scent: Smells.}")));
        assert_eq!(array, flat);
        assert_eq!(array[0].name, "Ferocity");
        assert_eq!(array[0].description, "Keeps fighting.");
        assert_eq!(array[0].traits, None);
    }

    #[test]
    fn test_unknown_category_is_dropped() {
        let abilities = normalize_abilities(Some(&yaml("[{name: Aura, desc: x, category: passive}]")));
        assert_eq!(abilities[0].category, None);
    }

    #[test]
    fn test_scalar_group_is_empty() {
        assert!(normalize_abilities(Some(&yaml("nothing"))).is_empty());
    }
}
