//! Attack names and attack descriptions
//!
//!     Names look like `__Melee__ ⬻ jaws`: an optional double-underscore type tag
//!     (case-insensitive, melee when absent), an optional single action glyph, then the
//!     display name.
//!
//!     Descriptions are parenthesized trait lists, `(agile, area-fire, burst 10 ft., range
//!     increment 30 feet)`. Tokens are tried in this order, first match wins:
//!         1. `area-fire` / `auto-fire` (exact literal) → action override
//!         2. `<burst|cone|line|emanation> <n> [ft.|feet]` → area
//!         3. `range [increment] <n> [ft.|feet]` → range increment or max
//!         4. anything else → lowercased trait

use super::actions::ACTION_GLYPHS;
use super::common::FEET_PATTERN;
use crate::codex::statblock::{AreaShape, AttackType, StrikeAction, StrikeArea, StrikeRange};
use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^__((?i:melee|ranged))__\s*").unwrap());

static AREA_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(burst|cone|line|emanation)\s+(\d+)\s*{}?$",
        FEET_PATTERN
    ))
    .unwrap()
});

static RANGE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^range\s+(increment\s+)?(\d+)\s*{}?$",
        FEET_PATTERN
    ))
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackName {
    pub attack_type: AttackType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttackDescription {
    pub traits: Vec<String>,
    pub action: Option<StrikeAction>,
    pub area: Option<StrikeArea>,
    pub range: Option<StrikeRange>,
}

pub fn parse_attack_name(input: &str) -> AttackName {
    let mut rest = input.trim();
    let mut attack_type = AttackType::Melee;

    if let Some(caps) = TYPE_TAG.captures(rest) {
        attack_type = AttackType::from_input(&caps[1]).unwrap_or_default();
        rest = &rest[caps[0].len()..];
    }

    let rest = rest.trim_start();
    let rest = match rest.chars().next() {
        Some(glyph) if ACTION_GLYPHS.contains(&glyph) => &rest[glyph.len_utf8()..],
        _ => rest,
    };

    AttackName {
        attack_type,
        name: rest.trim().to_string(),
    }
}

pub fn parse_attack_desc(input: &str) -> AttackDescription {
    let inner = input.trim();
    let inner = inner.strip_prefix('(').unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let mut desc = AttackDescription::default();
    for token in inner.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token {
            "area-fire" => {
                desc.action = Some(StrikeAction::AreaFire);
                continue;
            }
            "auto-fire" => {
                desc.action = Some(StrikeAction::AutoFire);
                continue;
            }
            _ => {}
        }

        if let Some(caps) = AREA_TOKEN.captures(token) {
            if let (Some(shape), Ok(value)) = (AreaShape::from_input(&caps[1]), caps[2].parse()) {
                desc.area = Some(StrikeArea { shape, value });
                continue;
            }
        }

        if let Some(caps) = RANGE_TOKEN.captures(token) {
            if let Ok(value) = caps[2].parse() {
                let range = desc.range.get_or_insert_with(StrikeRange::default);
                if caps.get(1).is_some() {
                    range.increment = Some(value);
                } else {
                    range.max = Some(value);
                }
                continue;
            }
        }

        desc.traits.push(token.to_lowercase());
    }
    desc
}
