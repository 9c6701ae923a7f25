//! Damage strings
//!
//!     One or more clauses joined by ` plus ` (case-insensitive). A clause starting with a
//!     dice formula is a damage roll, the rest of the clause being its type (`untyped` when
//!     there is none). Any other clause is a non-dice rider such as `Grab` or `Knockdown`
//!     and lands in the effects list.

use super::common::DICE_PATTERN;
use crate::codex::statblock::DamageRoll;
use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i) plus ").unwrap());

static DAMAGE_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^({})\s*(.*)$", DICE_PATTERN)).unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DamageParse {
    pub damage: Vec<DamageRoll>,
    pub effects: Vec<String>,
}

impl DamageParse {
    /// Append another parse, keeping both lists in order.
    pub fn extend(&mut self, other: DamageParse) {
        self.damage.extend(other.damage);
        self.effects.extend(other.effects);
    }
}

pub fn parse_damage_string(input: &str) -> DamageParse {
    let mut parsed = DamageParse::default();

    for clause in SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        match DAMAGE_CLAUSE.captures(clause) {
            Some(caps) => {
                let damage_type = caps[2].trim().to_lowercase();
                let damage_type = if damage_type.is_empty() {
                    "untyped".to_string()
                } else {
                    damage_type
                };
                parsed.damage.push(DamageRoll::new(&caps[1], damage_type));
            }
            None => parsed.effects.push(clause.to_string()),
        }
    }
    parsed
}
