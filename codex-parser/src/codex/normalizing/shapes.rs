//! Keyed groups in either authored shape
//!
//!     Groups such as ability modifiers, saves and skills were first authored as an array of
//!     single-key objects and later as a flat object:
//!
//!         abilityMods: [{str: 2}, {dex: 3}]
//!         abilityMods: {str: 2, dex: 3}
//!
//!     Both persist in real vaults. `keyed_entries` is the one place that tells them apart,
//!     with exactly two branches, and hands the group normalizers the same ordered
//!     `(key, value)` list for either.

use super::coerce::key_text;
use serde_yaml::{Mapping, Value};

pub fn keyed_entries(value: Option<&Value>) -> Vec<(String, &Value)> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_mapping)
            .flat_map(mapping_entries)
            .collect(),
        Some(Value::Mapping(map)) => mapping_entries(map),
        _ => Vec::new(),
    }
}

/// The entries of one mapping, in authored order, with non-text keys skipped.
pub fn mapping_entries(map: &Mapping) -> Vec<(String, &Value)> {
    map.iter()
        .filter_map(|(key, value)| key_text(key).map(|key| (key, value)))
        .collect()
}

/// Look up the first present key among `keys` in a mapping.
pub fn field<'a>(map: &'a Mapping, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}
