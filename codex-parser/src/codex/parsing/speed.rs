//! Speed strings
//!
//!     Comma separated clauses, each either a bare `<n> [feet|ft.]` (land speed, the last one
//!     wins) or `<fly|swim|climb|burrow> <n> [feet|ft.]`. Clauses matching neither are kept
//!     verbatim in the note, e.g. `air walk` or `ignores difficult terrain`.

use super::common::FEET_PATTERN;
use crate::codex::statblock::Speed;
use once_cell::sync::Lazy;
use regex::Regex;

static LAND_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^(\d+)\s*{}?$", FEET_PATTERN)).unwrap());

static NAMED_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(fly|swim|climb|burrow)\s+(\d+)\s*{}?$",
        FEET_PATTERN
    ))
    .unwrap()
});

pub fn parse_speed_string(input: &str) -> Speed {
    let mut speed = Speed::default();
    let mut unmatched = Vec::new();

    for clause in input.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if let Some(caps) = LAND_CLAUSE.captures(clause) {
            if let Ok(value) = caps[1].parse() {
                speed.land = value;
                continue;
            }
        }
        if let Some(caps) = NAMED_CLAUSE.captures(clause) {
            if let Ok(value) = caps[2].parse::<i64>() {
                let slot = match caps[1].to_lowercase().as_str() {
                    "fly" => &mut speed.fly,
                    "swim" => &mut speed.swim,
                    "climb" => &mut speed.climb,
                    _ => &mut speed.burrow,
                };
                *slot = Some(value);
                continue;
            }
        }
        unmatched.push(clause);
    }

    if !unmatched.is_empty() {
        speed.note = Some(unmatched.join(", "));
    }
    speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_and_named_speeds() {
        let speed = parse_speed_string("25 feet, fly 60 feet, swim 30 feet");
        assert_eq!(
            speed,
            Speed {
                land: 25,
                fly: Some(60),
                swim: Some(30),
                ..Speed::default()
            }
        );
    }

    #[test]
    fn test_last_land_clause_wins() {
        assert_eq!(parse_speed_string("20 feet, 30 ft.").land, 30);
    }

    #[test]
    fn test_no_land_clause_defaults_to_zero() {
        let speed = parse_speed_string("Burrow 15 ft");
        assert_eq!(speed.land, 0);
        assert_eq!(speed.burrow, Some(15));
    }

    #[test]
    fn test_unmatched_clauses_become_note() {
        let speed = parse_speed_string("30 feet, air walk, climb 20 feet");
        assert_eq!(speed.land, 30);
        assert_eq!(speed.climb, Some(20));
        assert_eq!(speed.note.as_deref(), Some("air walk"));
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_speed_string("40").land, 40);
    }
}
