//! Sense lists
//!
//!     Grammar for one sense: `<type-phrase> [(<acuity>)] [<integer> (feet|ft.)]` where the
//!     acuity is one of precise, imprecise or vague. A combined string is split on commas.
//!     The type phrase is slugified, so `low-light vision` becomes `low-light-vision`.

use super::common::{slugify, FEET_PATTERN};
use crate::codex::statblock::{Acuity, Sense};
use once_cell::sync::Lazy;
use regex::Regex;

static SENSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<kind>.+?)\s*(?:\((?P<acuity>precise|imprecise|vague)\))?\s*(?:(?P<range>\d+)\s*{})?$",
        FEET_PATTERN
    ))
    .unwrap()
});

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

/// Parse a comma separated sense list, preserving order. Empty entries are dropped.
pub fn parse_senses_string(input: &str) -> Vec<Sense> {
    SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_sense)
        .collect()
}

/// Parse a single sense. Text outside the grammar still yields `{type: slug(text)}`.
pub fn parse_sense(input: &str) -> Sense {
    let input = input.trim();
    let Some(caps) = SENSE.captures(input) else {
        return Sense::bare(slugify(input));
    };

    let kind = caps
        .name("kind")
        .map(|m| slugify(m.as_str()))
        .unwrap_or_default();
    Sense {
        kind,
        acuity: caps
            .name("acuity")
            .and_then(|m| Acuity::from_input(m.as_str())),
        range: caps.name("range").and_then(|m| m.as_str().parse().ok()),
    }
}
