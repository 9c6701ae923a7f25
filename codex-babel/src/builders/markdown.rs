//! Note bodies to html
//!
//! Bodies are markdown rendered with comrak (tables, strikethrough, autolinks). Obsidian
//! wikilinks have no markdown equivalent, so they are rewritten first into journal links:
//!
//!     [[Sandpoint]]                 →  @UUID[JournalEntry.<id>]{Sandpoint}
//!     [[Sandpoint|the town]]        →  @UUID[JournalEntry.<id>]{the town}
//!     [[Sandpoint#History]]         →  @UUID[JournalEntry.<id>]{Sandpoint}
//!
//! Link targets always resolve to journal ids; a link to a creature note points at a journal
//! id that no document carries.

use super::BuildContext;
use codex_parser::codex::enriching::enrich_inline;
use comrak::{markdown_to_html, ComrakOptions};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WIKILINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[(?P<target>[^\]\|#]+)(?:#(?P<heading>[^\]\|]*))?(?:\|(?P<alias>[^\]]+))?\]\]")
        .unwrap()
});

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

pub fn rewrite_wikilinks(text: &str, ctx: &BuildContext) -> String {
    WIKILINK
        .replace_all(text, |caps: &Captures| {
            let target = caps["target"].trim();
            let label = caps
                .name("alias")
                .map(|alias| alias.as_str().trim())
                .filter(|alias| !alias.is_empty())
                .unwrap_or(target);
            format!(
                "@UUID[JournalEntry.{}]{{{}}}",
                ctx.ids.journal_id(target),
                label
            )
        })
        .into_owned()
}

/// Render a note body to html. Blank bodies render to an empty string.
pub fn render_markdown(text: &str, ctx: &BuildContext) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let html = markdown_to_html(&rewrite_wikilinks(text, ctx), &comrak_options());
    let html = html.trim_end().to_string();
    if ctx.enrich {
        enrich_inline(&html)
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wikilink_forms() {
        let ctx = BuildContext::default();
        let id = ctx.ids.journal_id("Sandpoint");
        assert_eq!(
            rewrite_wikilinks("see [[Sandpoint]]", &ctx),
            format!("see @UUID[JournalEntry.{}]{{Sandpoint}}", id)
        );
        assert_eq!(
            rewrite_wikilinks("[[Sandpoint|the town]]", &ctx),
            format!("@UUID[JournalEntry.{}]{{the town}}", id)
        );
        assert_eq!(
            rewrite_wikilinks("[[Sandpoint#History]]", &ctx),
            format!("@UUID[JournalEntry.{}]{{Sandpoint}}", id)
        );
    }

    #[test]
    fn test_render_paragraphs_and_table() {
        let ctx = BuildContext::default();
        let html = render_markdown("Intro\n\n| a | b |\n|---|---|\n| 1 | 2 |\n", &ctx);
        assert!(html.starts_with("<p>Intro</p>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_enriches_when_enabled() {
        let text = "Guards are **frightened 1** of the dark.";
        let enriched = render_markdown(text, &BuildContext::default());
        assert!(enriched.contains("@UUID[Compendium.pf2e.conditionitems.Item.Frightened]{frightened 1}"));

        let plain = render_markdown(text, &BuildContext::new(Default::default(), false));
        assert_eq!(plain, "<p>Guards are <strong>frightened 1</strong> of the dark.</p>");
    }

    #[test]
    fn test_render_keeps_links_intact() {
        let ctx = BuildContext::default();
        let html = render_markdown(
            "Rules: <https://example.com/prone-rules> say the target falls prone.",
            &ctx,
        );
        assert_eq!(
            html,
            "<p>Rules: <a href=\"https://example.com/prone-rules\">https://example.com/prone-rules</a> \
             say the target falls @UUID[Compendium.pf2e.conditionitems.Item.Prone]{prone}.</p>"
        );

        let html = render_markdown("See [prone](https://example.com/prone) rules.", &ctx);
        assert_eq!(
            html,
            "<p>See <a href=\"https://example.com/prone\">prone</a> rules.</p>"
        );
    }

    #[test]
    fn test_blank_body() {
        assert_eq!(render_markdown("  \n", &BuildContext::default()), "");
    }
}
