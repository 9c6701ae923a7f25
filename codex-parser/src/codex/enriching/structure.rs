//! Paragraph structure
//!
//!     The last stage lays the text out in one of three ways, chosen by the bold markers it
//!     contains, in this order:
//!
//!         1. Degrees of success (`**Critical Success**`, `**Success**`, `**Failure**`,
//!            `**Critical Failure**`): preamble paragraphs, `<hr />`, then one labelled
//!            paragraph per degree.
//!         2. Activity parts (`**Trigger**`, `**Effect**`, `**Requirements**`,
//!            `**Frequency**`): preamble paragraphs, then one labelled paragraph per part,
//!            with `<hr />` before `Effect`.
//!         3. Plain text: blank-line separated blocks, each wrapped in `<p>`.
//!
//!     A labelled paragraph is `<p><strong>Label</strong> content</p>`. Blocks of a multi-block
//!     text are trimmed and concatenated without separators; a single block is wrapped as is.
//!     The degree rule is always written before the first degree, and every `Effect` gets one,
//!     even when nothing precedes them. Text that already starts with `<p>` or `<hr />` is left
//!     alone.

use once_cell::sync::Lazy;
use regex::Regex;

static DEGREE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(Critical Success|Critical Failure|Success|Failure)\*\*").unwrap()
});

static ACTIVITY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(Trigger|Effect|Requirements|Frequency)\*\*").unwrap());

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").unwrap());

const RULE: &str = "<hr />";

pub fn format_structure(text: &str) -> String {
    let leading = text.trim_start();
    if leading.starts_with("<p>") || leading.starts_with(RULE) {
        return text.to_string();
    }

    if DEGREE_MARKER.is_match(text) {
        labelled_layout(text, &DEGREE_MARKER, |_| true, true)
    } else if ACTIVITY_MARKER.is_match(text) {
        labelled_layout(text, &ACTIVITY_MARKER, |label| label == "Effect", false)
    } else {
        paragraphs(text)
    }
}

/// Plain layout: one `<p>` per blank-line separated block. Text without a blank line is a
/// single block and keeps its whitespace.
pub fn paragraphs(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    if !BLANK_LINE.is_match(text) {
        return format!("<p>{}</p>", text);
    }
    trimmed_blocks(text)
}

fn trimmed_blocks(text: &str) -> String {
    BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", block))
        .collect()
}

/// Split `text` at each marker. `rule_before(label)` decides where a rule goes; with
/// `rule_once` it is only asked for the first marker.
fn labelled_layout(
    text: &str,
    marker: &Regex,
    rule_before: impl Fn(&str) -> bool,
    rule_once: bool,
) -> String {
    let markers: Vec<_> = marker.captures_iter(text).collect();
    let Some(first) = markers.first().and_then(|caps| caps.get(0)) else {
        return paragraphs(text);
    };

    let mut out = trimmed_blocks(&text[..first.start()]);
    for (index, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let content = text[whole.end()..end].trim();

        if (index == 0 || !rule_once) && rule_before(label.as_str()) {
            out.push_str(RULE);
        }
        if content.is_empty() {
            out.push_str(&format!("<p><strong>{}</strong></p>", label.as_str()));
        } else {
            out.push_str(&format!("<p><strong>{}</strong> {}</p>", label.as_str(), content));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraphs() {
        assert_eq!(
            format_structure("First block.\n  \nSecond\nline."),
            "<p>First block.</p><p>Second\nline.</p>"
        );
    }

    #[test]
    fn test_degrees_of_success() {
        let text = "The target must save.\n\n**Critical Success** Unaffected.\n**Success** Half.\n**Failure** Full.";
        assert_eq!(
            format_structure(text),
            "<p>The target must save.</p><hr /><p><strong>Critical Success</strong> Unaffected.</p>\
             <p><strong>Success</strong> Half.</p><p><strong>Failure</strong> Full.</p>"
        );
    }

    #[test]
    fn test_degrees_without_preamble() {
        assert_eq!(
            format_structure("**Success** Half damage.\n**Failure** Full damage."),
            "<hr /><p><strong>Success</strong> Half damage.</p><p><strong>Failure</strong> Full damage.</p>"
        );
    }

    #[test]
    fn test_single_block_keeps_whitespace() {
        assert_eq!(paragraphs(" The goblin waits. "), "<p> The goblin waits. </p>");
        assert_eq!(paragraphs("Line one\nline two"), "<p>Line one\nline two</p>");
        assert_eq!(paragraphs(" \n "), "");
    }

    #[test]
    fn test_activity_rule_before_effect() {
        let text = "**Frequency** once per day; **Trigger** An enemy moves; **Effect** The creature Strikes.";
        assert_eq!(
            format_structure(text),
            "<p><strong>Frequency</strong> once per day;</p><p><strong>Trigger</strong> An enemy moves;</p>\
             <hr /><p><strong>Effect</strong> The creature Strikes.</p>"
        );
    }

    #[test]
    fn test_every_effect_is_ruled() {
        assert_eq!(
            format_structure("**Effect** It glows. **Frequency** once per day"),
            "<hr /><p><strong>Effect</strong> It glows.</p><p><strong>Frequency</strong> once per day</p>"
        );
    }

    #[test]
    fn test_ruled_output_is_stable() {
        let once = format_structure("**Success** Half damage.");
        assert_eq!(format_structure(&once), once);
    }

    #[test]
    fn test_degrees_win_over_activity() {
        let out = format_structure("**Effect** Roll.\n**Failure** Ouch.");
        assert_eq!(
            out,
            "<p>**Effect** Roll.</p><hr /><p><strong>Failure</strong> Ouch.</p>"
        );
    }

    #[test]
    fn test_already_structured_is_untouched() {
        let html = "<p>done</p>";
        assert_eq!(format_structure(html), html);
        assert_eq!(format_structure("<hr /><p>x</p>"), "<hr /><p>x</p>");
    }
}
