//! Damage rolls: `4d6+3 fire damage` → `@Damage[(4d6+3)[fire]] damage`

use super::protected::replace_outside_annotations;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Damage types that get an inline roll.
pub const DAMAGE_TYPES: &[&str] = &[
    "piercing",
    "slashing",
    "bludgeoning",
    "fire",
    "cold",
    "electricity",
    "acid",
    "sonic",
    "force",
    "mental",
    "poison",
    "bleed",
    "vitality",
    "void",
];

static DAMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?P<dice>\d+d\d+)(?P<modifier>[+-]\d+)? (?P<type>(?i:{})) damage\b",
        DAMAGE_TYPES.join("|")
    ))
    .unwrap()
});

/// Annotate damage rolls. A formula with a modifier is parenthesized inside the token.
pub fn enrich_damage(text: &str) -> String {
    replace_outside_annotations(text, |segment| {
        DAMAGE
            .replace_all(segment, |caps: &Captures| {
                let formula = match caps.name("modifier") {
                    Some(modifier) => format!("({}{})", &caps["dice"], modifier.as_str()),
                    None => caps["dice"].to_string(),
                };
                format!("@Damage[{}[{}]] damage", formula, caps["type"].to_lowercase())
            })
            .into_owned()
    })
}
