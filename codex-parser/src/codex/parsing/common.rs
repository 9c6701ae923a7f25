//! Helpers shared by the primitive parsers and the normalizer

use once_cell::sync::Lazy;
use regex::Regex;

/// A dice formula: `NdM` with an optional signed integer modifier (`1d6`, `2d8+4`, `1d4-1`).
pub const DICE_PATTERN: &str = r"\d+d\d+(?:[+-]\d+)?";

/// A distance unit following a number: `feet`, `ft.` or `ft`.
pub const FEET_PATTERN: &str = r"(?:feet|ft\.?)";

static SIGNED_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]?\d+").unwrap());

/// Lowercase, collapse every run of non-alphanumeric characters into one hyphen, and trim
/// hyphens from both ends. `"Low-Light  Vision"` becomes `"low-light-vision"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Uppercase the first character and keep the rest: `"arcana"` becomes `"Arcana"`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The first signed integer embedded anywhere in `input`, e.g. `-1` in `"Creature -1"`.
pub fn first_signed_int(input: &str) -> Option<i64> {
    SIGNED_INT
        .find(input)
        .and_then(|m| m.as_str().trim_start_matches('+').parse().ok())
}
