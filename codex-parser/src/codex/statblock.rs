//! Normalized creature records
//!
//!     These are the strongly typed values the normalizer converges on, whatever shape the
//!     authored frontmatter had. Every record is built once per conversion run and dropped
//!     after the output document is serialized.
//!
//!     Enumerations expose `from_input`, which case-folds the authored text and checks it
//!     against an explicit allow-list. Unknown text yields `None` so the caller can pick the
//!     documented fallback.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Unique,
}

impl Rarity {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "unique" => Some(Rarity::Unique),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Unique => "unique",
        }
    }
}

/// Creature size, serialized with the compendium's short slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "tiny")]
    Tiny,
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "med")]
    Medium,
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "huge")]
    Huge,
    #[serde(rename = "grg")]
    Gargantuan,
}

impl Size {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "tiny" => Some(Size::Tiny),
            "small" | "sm" => Some(Size::Small),
            "medium" | "med" => Some(Size::Medium),
            "large" | "lg" => Some(Size::Large),
            "huge" => Some(Size::Huge),
            "gargantuan" | "grg" => Some(Size::Gargantuan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Tiny => "tiny",
            Size::Small => "sm",
            Size::Medium => "med",
            Size::Large => "lg",
            Size::Huge => "huge",
            Size::Gargantuan => "grg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acuity {
    Precise,
    Imprecise,
    Vague,
}

impl Acuity {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "precise" => Some(Acuity::Precise),
            "imprecise" => Some(Acuity::Imprecise),
            "vague" => Some(Acuity::Vague),
            _ => None,
        }
    }
}

/// One perception sense, e.g. `scent (imprecise) 30 feet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acuity: Option<Acuity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i64>,
}

impl Sense {
    /// A sense with only a type slug.
    pub fn bare(kind: impl Into<String>) -> Self {
        Sense {
            kind: kind.into(),
            acuity: None,
            range: None,
        }
    }
}

/// The six ability modifiers (already computed modifiers, not scores).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityMods {
    pub str: i64,
    pub dex: i64,
    pub con: i64,
    pub int: i64,
    pub wis: i64,
    pub cha: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perception {
    #[serde(rename = "mod")]
    pub modifier: i64,
    pub senses: Vec<Sense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A Lore skill, kept apart from the standard skill map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreSkill {
    pub name: String,
    #[serde(rename = "mod")]
    pub modifier: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Saves {
    pub fortitude: i64,
    pub reflex: i64,
    pub will: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defenses {
    pub ac: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_note: Option<String>,
    pub saves: Saves,
    pub hp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immunities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistances: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<String>,
}

impl Default for Defenses {
    fn default() -> Self {
        Defenses {
            ac: 10,
            ac_note: None,
            saves: Saves::default(),
            hp: 0,
            hp_note: None,
            immunities: None,
            resistances: None,
            weaknesses: None,
        }
    }
}

/// Movement speeds in feet. `land` is always present (0 when unknown).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Speed {
    pub land: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climb: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burrow: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    #[default]
    Melee,
    Ranged,
}

impl AttackType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "melee" => Some(AttackType::Melee),
            "ranged" => Some(AttackType::Ranged),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::Melee => "melee",
            AttackType::Ranged => "ranged",
        }
    }
}

/// Replaces the implicit "strike" action of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrikeAction {
    AreaFire,
    AutoFire,
}

impl StrikeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrikeAction::AreaFire => "area-fire",
            StrikeAction::AutoFire => "auto-fire",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaShape {
    Burst,
    Cone,
    Line,
    Emanation,
}

impl AreaShape {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "burst" => Some(AreaShape::Burst),
            "cone" => Some(AreaShape::Cone),
            "line" => Some(AreaShape::Line),
            "emanation" => Some(AreaShape::Emanation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaShape::Burst => "burst",
            AreaShape::Cone => "cone",
            AreaShape::Line => "line",
            AreaShape::Emanation => "emanation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeArea {
    #[serde(rename = "type")]
    pub shape: AreaShape,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrikeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// One damage roll of a strike: a verbatim dice formula and a lowercased type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    pub formula: String,
    #[serde(rename = "type")]
    pub damage_type: String,
}

impl DamageRoll {
    pub fn new(formula: impl Into<String>, damage_type: impl Into<String>) -> Self {
        DamageRoll {
            formula: formula.into(),
            damage_type: damage_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strike {
    pub name: String,
    #[serde(rename = "type")]
    pub attack_type: AttackType,
    pub bonus: i64,
    pub traits: Vec<String>,
    pub damage: Vec<DamageRoll>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<StrikeAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<StrikeArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<StrikeRange>,
}

/// Action cost shown by the action-icon glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCost {
    One,
    Two,
    Three,
    Reaction,
    Free,
}

impl ActionCost {
    /// Number of actions for the compendium's `actions` field; `None` for reactions and free actions.
    pub fn count(&self) -> Option<u8> {
        match self {
            ActionCost::One => Some(1),
            ActionCost::Two => Some(2),
            ActionCost::Three => Some(3),
            ActionCost::Reaction | ActionCost::Free => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Offensive,
    Defensive,
    Interaction,
}

impl AbilityCategory {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "offensive" => Some(AbilityCategory::Offensive),
            "defensive" => Some(AbilityCategory::Defensive),
            "interaction" => Some(AbilityCategory::Interaction),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityCategory::Offensive => "offensive",
            AbilityCategory::Defensive => "defensive",
            AbilityCategory::Interaction => "interaction",
        }
    }
}

/// A special ability; `description` is the raw authored markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AbilityCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionCost>,
}

/// Abilities grouped by their position in the rendered statblock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abilities {
    pub top: Vec<Ability>,
    pub mid: Vec<Ability>,
    pub bottom: Vec<Ability>,
}

impl Abilities {
    /// Top, mid and bottom abilities in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.top.iter().chain(&self.mid).chain(&self.bottom)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.mid.is_empty() && self.bottom.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    Arcane,
    Divine,
    Occult,
    Primal,
}

impl Tradition {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "arcane" => Some(Tradition::Arcane),
            "divine" => Some(Tradition::Divine),
            "occult" => Some(Tradition::Occult),
            "primal" => Some(Tradition::Primal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tradition::Arcane => "arcane",
            Tradition::Divine => "divine",
            Tradition::Occult => "occult",
            Tradition::Primal => "primal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastingType {
    Prepared,
    Spontaneous,
    #[default]
    Innate,
    Focus,
}

impl CastingType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "prepared" => Some(CastingType::Prepared),
            "spontaneous" => Some(CastingType::Spontaneous),
            "innate" => Some(CastingType::Innate),
            "focus" => Some(CastingType::Focus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CastingType::Prepared => "prepared",
            CastingType::Spontaneous => "spontaneous",
            CastingType::Innate => "innate",
            CastingType::Focus => "focus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRank {
    pub rank: u8,
    pub spells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spellcasting {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradition: Option<Tradition>,
    pub casting: CastingType,
    pub dc: i64,
    pub attack: i64,
    pub ranks: Vec<SpellRank>,
}

/// The fully normalized statblock of one creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureStatblock {
    pub name: String,
    pub level: i64,
    pub rarity: Rarity,
    pub size: Size,
    pub traits: Vec<String>,
    pub published: bool,
    pub ability_mods: AbilityMods,
    pub perception: Perception,
    pub languages: Vec<String>,
    pub skills: BTreeMap<String, i64>,
    pub lore: Vec<LoreSkill>,
    pub defenses: Defenses,
    pub speed: Speed,
    pub strikes: Vec<Strike>,
    pub abilities: Abilities,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spellcasting: Vec<Spellcasting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
