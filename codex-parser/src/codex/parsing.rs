//! Primitive parsers
//!
//!     Small grammars for the fragments authors type by hand into statblock frontmatter.
//!     Every parser here is a pure function over a `&str`: the same text always yields the
//!     same value, and text that does not fit the grammar degrades to a best-effort partial
//!     result instead of an error.
//!
//!     Grammars (see each module for the exact patterns):
//!         senses   `<type-phrase> [(<acuity>)] [<n> feet|ft.]`, comma separated
//!         speed    `<n> feet` | `<fly|swim|climb|burrow> <n> feet`, comma separated
//!         attack   `__Melee__ ⬻ jaws` names and `(agile, range increment 30 feet)` trait lists
//!         damage   `2d6+4 slashing plus Grab`
//!         actions  the five action-icon glyphs
//!
//!     The patterns are regexes compiled once into `Lazy` statics and tried in declaration
//!     order, first match wins.

pub mod actions;
pub mod attack;
pub mod common;
pub mod damage;
pub mod senses;
pub mod speed;

pub use actions::{action_cost, extract_action_glyph, ACTION_GLYPHS};
pub use attack::{parse_attack_desc, parse_attack_name, AttackDescription, AttackName};
pub use common::{capitalize, first_signed_int, slugify};
pub use damage::{parse_damage_string, DamageParse};
pub use senses::{parse_sense, parse_senses_string};
pub use speed::parse_speed_string;
