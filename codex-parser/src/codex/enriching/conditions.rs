//! Condition links
//!
//!     Conditions become compendium links whose label is the authored text:
//!
//!         frightened 2  →  @UUID[Compendium.pf2e.conditionitems.Item.Frightened]{frightened 2}
//!         off-guard     →  @UUID[Compendium.pf2e.conditionitems.Item.Off-Guard]{off-guard}
//!
//!     Valued conditions only link when followed by a value. The valueless list leaves out
//!     conditions whose names are everyday words (hidden, concealed, invisible, observed,
//!     undetected, unnoticed, broken, friendly, helpful, hostile, indifferent, unfriendly,
//!     controlled, persistent damage). Linking those would misfire on ordinary prose, so
//!     any word added here has to be checked against real ability text first.

use super::protected::replace_outside_annotations;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const COMPENDIUM_PATH: &str = "Compendium.pf2e.conditionitems.Item";

/// `(lowercase name, compendium name)`
pub const VALUED_CONDITIONS: &[(&str, &str)] = &[
    ("clumsy", "Clumsy"),
    ("doomed", "Doomed"),
    ("drained", "Drained"),
    ("dying", "Dying"),
    ("enfeebled", "Enfeebled"),
    ("frightened", "Frightened"),
    ("sickened", "Sickened"),
    ("slowed", "Slowed"),
    ("stunned", "Stunned"),
    ("stupefied", "Stupefied"),
    ("wounded", "Wounded"),
];

pub const VALUELESS_CONDITIONS: &[(&str, &str)] = &[
    ("blinded", "Blinded"),
    ("confused", "Confused"),
    ("dazzled", "Dazzled"),
    ("deafened", "Deafened"),
    ("encumbered", "Encumbered"),
    ("fascinated", "Fascinated"),
    ("fatigued", "Fatigued"),
    ("fleeing", "Fleeing"),
    ("grabbed", "Grabbed"),
    ("immobilized", "Immobilized"),
    ("off-guard", "Off-Guard"),
    ("paralyzed", "Paralyzed"),
    ("petrified", "Petrified"),
    ("prone", "Prone"),
    ("quickened", "Quickened"),
    ("restrained", "Restrained"),
    ("unconscious", "Unconscious"),
];

fn alternation(table: &[(&str, &str)]) -> String {
    table
        .iter()
        .map(|(name, _)| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

static VALUED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?P<name>{}) (?P<value>\d+)\b",
        alternation(VALUED_CONDITIONS)
    ))
    .unwrap()
});

static VALUELESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?P<name>{})\b",
        alternation(VALUELESS_CONDITIONS)
    ))
    .unwrap()
});

/// The compendium name for an authored condition word, in any casing.
fn compendium_name(table: &[(&str, &'static str)], word: &str) -> Option<&'static str> {
    let word = word.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, title)| *title)
}

fn link(title: &str, label: &str) -> String {
    format!("@UUID[{}.{}]{{{}}}", COMPENDIUM_PATH, title, label)
}

fn enrich_with(text: &str, pattern: &Regex, table: &[(&str, &'static str)]) -> String {
    replace_outside_annotations(text, |segment| {
        pattern
            .replace_all(segment, |caps: &Captures| {
                let authored = &caps[0];
                match compendium_name(table, &caps["name"]) {
                    Some(title) => link(title, authored),
                    None => authored.to_string(),
                }
            })
            .into_owned()
    })
}

/// `frightened 2` and friends. The label keeps the authored casing and value.
pub fn enrich_valued_conditions(text: &str) -> String {
    enrich_with(text, &VALUED, VALUED_CONDITIONS)
}

pub fn enrich_valueless_conditions(text: &str) -> String {
    enrich_with(text, &VALUELESS, VALUELESS_CONDITIONS)
}

/// Both condition passes, valued first.
pub fn enrich_conditions(text: &str) -> String {
    enrich_valueless_conditions(&enrich_valued_conditions(text))
}
