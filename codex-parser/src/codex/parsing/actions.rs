//! Action-icon glyphs
//!
//!     Authored statblocks mark action costs with one of five glyphs from the action icon
//!     font. Attack names carry at most one glyph right after their type tag; ability names
//!     may carry one anywhere.

use crate::codex::statblock::ActionCost;

/// The fixed glyph set, in the order one, two, three actions, reaction, free action.
pub const ACTION_GLYPHS: [char; 5] = ['⬻', '⬺', '⬽', '⬲', '⭓'];

pub fn action_cost(glyph: char) -> Option<ActionCost> {
    match glyph {
        '⬻' => Some(ActionCost::One),
        '⬺' => Some(ActionCost::Two),
        '⬽' => Some(ActionCost::Three),
        '⬲' => Some(ActionCost::Reaction),
        '⭓' => Some(ActionCost::Free),
        _ => None,
    }
}

/// Remove the first action glyph from `name`, returning the cleaned name and the cost it
/// encoded. Whitespace left around the removed glyph is collapsed.
pub fn extract_action_glyph(name: &str) -> (String, Option<ActionCost>) {
    match name.char_indices().find(|(_, c)| ACTION_GLYPHS.contains(c)) {
        Some((at, glyph)) => {
            let before = name[..at].trim_end();
            let after = name[at + glyph.len_utf8()..].trim_start();
            let cleaned = match (before.is_empty(), after.is_empty()) {
                (false, false) => format!("{} {}", before, after),
                _ => format!("{}{}", before, after),
            };
            (cleaned.trim().to_string(), action_cost(glyph))
        }
        None => (name.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_leading_glyph() {
        assert_eq!(
            extract_action_glyph("⬺ Breath Weapon"),
            ("Breath Weapon".to_string(), Some(ActionCost::Two))
        );
    }

    #[test]
    fn test_extract_trailing_glyph() {
        assert_eq!(
            extract_action_glyph("Attack of Opportunity ⬲"),
            ("Attack of Opportunity".to_string(), Some(ActionCost::Reaction))
        );
    }

    #[test]
    fn test_no_glyph() {
        assert_eq!(
            extract_action_glyph(" Sneak Attack "),
            ("Sneak Attack".to_string(), None)
        );
    }

    #[test]
    fn test_every_glyph_has_a_cost() {
        for glyph in ACTION_GLYPHS {
            assert!(action_cost(glyph).is_some());
        }
    }
}
