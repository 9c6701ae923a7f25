//! Skills and Lore skills
//!
//!     Lore skills are recognized by either authoring convention, a trailing ` Lore` or a
//!     leading `Lore:` (both case-insensitive), and always come out named `<Subject> Lore`
//!     with the subject's first letter uppercased.
//!     Every other entry goes into the skill map under its slug.

use super::coerce::to_number;
use super::shapes::{field, keyed_entries};
use crate::codex::parsing::{capitalize, slugify};
use crate::codex::statblock::LoreSkill;
use serde_yaml::Value;
use std::collections::BTreeMap;

const LORE_PREFIX: &str = "lore:";
const LORE_SUFFIX: &str = " lore";

pub fn normalize_skills(value: Option<&Value>) -> (BTreeMap<String, i64>, Vec<LoreSkill>) {
    let mut skills = BTreeMap::new();
    let mut lore = Vec::new();

    for (name, value) in keyed_entries(value) {
        let modifier = skill_modifier(value);
        match lore_subject(&name) {
            Some(subject) => lore.push(LoreSkill {
                name: format!("{} Lore", capitalize(subject)),
                modifier,
            }),
            None => {
                let slug = slugify(&name);
                if !slug.is_empty() {
                    skills.insert(slug, modifier);
                }
            }
        }
    }
    (skills, lore)
}

/// A skill value is a scalar modifier or an object carrying one.
fn skill_modifier(value: &Value) -> i64 {
    match value.as_mapping() {
        Some(map) => to_number(field(map, &["mod", "value", "base"]), 0),
        None => to_number(Some(value), 0),
    }
}

/// The subject of a Lore skill name, or `None` for a standard skill.
fn lore_subject(name: &str) -> Option<&str> {
    let name = name.trim();
    let subject = if name
        .get(..LORE_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(LORE_PREFIX))
    {
        &name[LORE_PREFIX.len()..]
    } else if name.len() > LORE_SUFFIX.len()
        && name
            .get(name.len() - LORE_SUFFIX.len()..)
            .is_some_and(|s| s.eq_ignore_ascii_case(LORE_SUFFIX))
    {
        &name[..name.len() - LORE_SUFFIX.len()]
    } else {
        return None;
    };

    let subject = subject.trim();
    (!subject.is_empty()).then_some(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_lore_conventions() {
        assert_eq!(lore_subject("Underworld Lore"), Some("Underworld"));
        assert_eq!(lore_subject("Lore: Arcana"), Some("Arcana"));
        assert_eq!(lore_subject("LORE:Sailing"), Some("Sailing"));
        assert_eq!(lore_subject("warfare lore"), Some("warfare"));
        assert_eq!(lore_subject("Athletics"), None);
        assert_eq!(lore_subject("Lore"), None);
        assert_eq!(lore_subject("Lore:"), None);
    }

    #[test]
    fn test_split_of_lore_and_standard_skills() {
        let (skills, lore) = normalize_skills(Some(&yaml(
            "{'Underworld Lore': 8, 'Lore: Arcana': 6, Athletics: 12}",
        )));
        assert_eq!(skills, BTreeMap::from([("athletics".to_string(), 12)]));
        assert_eq!(
            lore,
            vec![
                LoreSkill {
                    name: "Underworld Lore".to_string(),
                    modifier: 8
                },
                LoreSkill {
                    name: "Arcana Lore".to_string(),
                    modifier: 6
                },
            ]
        );
    }

    #[test]
    fn test_lore_subject_is_capitalized() {
        let (_, lore) = normalize_skills(Some(&yaml("[{'Lore: arcana': 6}, {sailing lore: 4}]")));
        let names: Vec<_> = lore.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Arcana Lore", "Sailing Lore"]);
    }

    #[test]
    fn test_object_valued_skill() {
        let (skills, _) = normalize_skills(Some(&yaml("[{Stealth: {mod: 9}}, {Thievery: '+7'}]")));
        assert_eq!(skills.get("stealth"), Some(&9));
        assert_eq!(skills.get("thievery"), Some(&7));
    }
}
