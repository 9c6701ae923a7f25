//! Creature actors
//!
//!     `build_actor` turns one CreatureStatblock into an `npc` actor document: the normalized
//!     fields mirrored into `system`, and one embedded item per strike, ability, spellcasting
//!     entry and lore skill, in that order.
//!
//!         item kind            source
//!         melee                strikes (melee and ranged alike)
//!         action               abilities, top + mid + bottom
//!         spellcastingEntry    spellcasting entries
//!         lore                 lore skills
//!
//!     Item `sort` values step by 100000 in output order.

use super::markdown::render_markdown;
use super::BuildContext;
use codex_parser::codex::parsing::slugify;
use codex_parser::codex::statblock::{
    Ability, ActionCost, CreatureStatblock, LoreSkill, Sense, Spellcasting, Strike,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const SORT_STEP: i64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub system: Value,
    pub items: Vec<ItemDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sort: i64,
    pub system: Value,
}

pub fn build_actor(statblock: &CreatureStatblock, body: &str, ctx: &BuildContext) -> ActorDocument {
    let id = ctx.ids.actor_id(&statblock.name);
    let mut items = Items::new(&id, ctx);

    for (index, strike) in statblock.strikes.iter().enumerate() {
        items.push("melee", index, &strike.name, |item_id| strike_system(strike, item_id, ctx));
    }
    for (index, ability) in statblock.abilities.iter().enumerate() {
        items.push("action", index, &ability.name, |_| ability_system(ability, ctx));
    }
    for (index, entry) in statblock.spellcasting.iter().enumerate() {
        items.push("spellcastingEntry", index, &entry.name, |_| spellcasting_system(entry));
    }
    for (index, lore) in statblock.lore.iter().enumerate() {
        items.push("lore", index, &lore.name, |_| lore_system(lore));
    }

    let items = items.items;
    tracing::debug!(actor = %statblock.name, %id, items = items.len(), "built actor");
    ActorDocument {
        id,
        name: statblock.name.clone(),
        kind: "npc".to_string(),
        system: actor_system(statblock, body, ctx),
        items,
    }
}

/// Collects items with their ids and sort order.
struct Items<'a> {
    actor_id: &'a str,
    ctx: &'a BuildContext,
    items: Vec<ItemDocument>,
}

impl<'a> Items<'a> {
    fn new(actor_id: &'a str, ctx: &'a BuildContext) -> Self {
        Items {
            actor_id,
            ctx,
            items: Vec::new(),
        }
    }

    fn push(&mut self, kind: &str, index: usize, name: &str, system: impl FnOnce(&str) -> Value) {
        let id = self.ctx.ids.item_id(self.actor_id, kind, index, name);
        let system = system(&id);
        let sort = SORT_STEP * (self.items.len() as i64 + 1);
        self.items.push(ItemDocument {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            sort,
            system,
        });
    }
}

fn actor_system(statblock: &CreatureStatblock, body: &str, ctx: &BuildContext) -> Value {
    let mods = &statblock.ability_mods;
    let defenses = &statblock.defenses;
    let speed = &statblock.speed;

    let other_speeds: Vec<Value> = [
        ("fly", speed.fly),
        ("swim", speed.swim),
        ("climb", speed.climb),
        ("burrow", speed.burrow),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.map(|v| json!({"type": kind, "value": v})))
    .collect();

    let skills: Map<String, Value> = statblock
        .skills
        .iter()
        .map(|(slug, modifier)| (slug.clone(), json!({"base": modifier})))
        .collect();

    json!({
        "abilities": {
            "str": {"mod": mods.str},
            "dex": {"mod": mods.dex},
            "con": {"mod": mods.con},
            "int": {"mod": mods.int},
            "wis": {"mod": mods.wis},
            "cha": {"mod": mods.cha},
        },
        "attributes": {
            "ac": {"value": defenses.ac, "details": defenses.ac_note.clone().unwrap_or_default()},
            "hp": {
                "value": defenses.hp,
                "max": defenses.hp,
                "temp": 0,
                "details": defenses.hp_note.clone().unwrap_or_default(),
            },
            "allSaves": {"value": defenses.saves.note.clone().unwrap_or_default()},
            "speed": {
                "value": speed.land,
                "otherSpeeds": other_speeds,
                "details": speed.note.clone().unwrap_or_default(),
            },
            "immunities": defenses.immunities,
            "resistances": defenses.resistances,
            "weaknesses": defenses.weaknesses,
        },
        "perception": {
            "mod": statblock.perception.modifier,
            "senses": statblock.perception.senses.iter().map(sense_value).collect::<Vec<_>>(),
            "details": statblock.perception.note.clone().unwrap_or_default(),
        },
        "saves": {
            "fortitude": {"value": defenses.saves.fortitude},
            "reflex": {"value": defenses.saves.reflex},
            "will": {"value": defenses.saves.will},
        },
        "skills": skills,
        "details": {
            "level": {"value": statblock.level},
            "languages": {"value": statblock.languages},
            "publicNotes": render_markdown(body, ctx),
            "publication": {"title": statblock.source.clone().unwrap_or_default()},
            "items": statblock.items,
        },
        "traits": {
            "rarity": statblock.rarity.as_str(),
            "size": {"value": statblock.size.as_str()},
            "value": statblock.traits,
        },
    })
}

fn sense_value(sense: &Sense) -> Value {
    let mut value = json!({"type": sense.kind});
    if let Some(acuity) = sense.acuity {
        value["acuity"] = json!(acuity);
    }
    if let Some(range) = sense.range {
        value["range"] = json!(range);
    }
    value
}

fn strike_system(strike: &Strike, item_id: &str, ctx: &BuildContext) -> Value {
    let damage_rolls: Map<String, Value> = strike
        .damage
        .iter()
        .enumerate()
        .map(|(index, roll)| {
            (
                ctx.ids.damage_id(item_id, index),
                json!({"damage": roll.formula, "damageType": roll.damage_type}),
            )
        })
        .collect();

    let mut system = json!({
        "weaponType": {"value": strike.attack_type.as_str()},
        "bonus": {"value": strike.bonus},
        "damageRolls": damage_rolls,
        "traits": {"value": strike.traits},
        "attackEffects": {"value": strike.effects.iter().map(|e| slugify(e)).collect::<Vec<_>>()},
    });
    if let Some(action) = strike.action {
        system["action"] = json!(action.as_str());
    }
    if let Some(area) = strike.area {
        system["area"] = json!({"type": area.shape.as_str(), "value": area.value});
    }
    if let Some(range) = strike.range {
        system["range"] = json!({"increment": range.increment, "max": range.max});
    }
    system
}

fn ability_system(ability: &Ability, ctx: &BuildContext) -> Value {
    let (action_type, actions) = match ability.actions {
        Some(ActionCost::Reaction) => ("reaction", None),
        Some(ActionCost::Free) => ("free", None),
        Some(cost) => ("action", cost.count()),
        None => ("passive", None),
    };
    json!({
        "description": {"value": ctx.description(&ability.description)},
        "actionType": {"value": action_type},
        "actions": {"value": actions},
        "category": ability.category.map(|c| c.as_str()),
        "traits": {"value": ability.traits.clone().unwrap_or_default()},
    })
}

fn spellcasting_system(entry: &Spellcasting) -> Value {
    json!({
        "tradition": {"value": entry.tradition.map(|t| t.as_str()).unwrap_or_default()},
        "prepared": {"value": entry.casting.as_str()},
        "spelldc": {"dc": entry.dc, "value": entry.attack},
        "spellList": entry
            .ranks
            .iter()
            .map(|rank| json!({"rank": rank.rank, "spells": rank.spells}))
            .collect::<Vec<_>>(),
    })
}

fn lore_system(lore: &LoreSkill) -> Value {
    json!({"mod": {"value": lore.modifier}})
}
