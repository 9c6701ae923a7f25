//! Lore journals
//!
//!     Every lore note becomes a journal entry with a single text page holding the rendered
//!     body. The page id derives from the journal id, so both are stable across runs.

use super::markdown::render_markdown;
use super::BuildContext;
use serde::Serialize;

/// Page text is stored as html.
pub const HTML_FORMAT: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub pages: Vec<JournalPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalPage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: PageText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    pub content: String,
    pub format: u8,
}

pub fn build_journal(title: &str, body: &str, ctx: &BuildContext) -> JournalDocument {
    let id = ctx.ids.journal_id(title);
    let page = JournalPage {
        id: ctx.ids.id(&format!("{}/page/0", id)),
        name: title.to_string(),
        kind: "text".to_string(),
        text: PageText {
            content: render_markdown(body, ctx),
            format: HTML_FORMAT,
        },
    };
    tracing::debug!(journal = %title, %id, "built journal");
    JournalDocument {
        id,
        name: title.to_string(),
        pages: vec![page],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text_page() {
        let ctx = BuildContext::default();
        let journal = build_journal("Sandpoint", "A quiet town.\n\nOn the coast.", &ctx);
        assert_eq!(journal.id, ctx.ids.journal_id("Sandpoint"));
        assert_eq!(journal.pages.len(), 1);
        let page = &journal.pages[0];
        assert_eq!(page.name, "Sandpoint");
        assert_eq!(page.kind, "text");
        assert_eq!(page.text.format, HTML_FORMAT);
        assert_eq!(page.text.content, "<p>A quiet town.</p>\n<p>On the coast.</p>");
        assert_ne!(page.id, journal.id);
    }

    #[test]
    fn test_ids_are_stable() {
        let ctx = BuildContext::default();
        assert_eq!(build_journal("Sandpoint", "", &ctx), build_journal("Sandpoint", "", &ctx));
    }

    #[test]
    fn test_serialized_shape() {
        let journal = build_journal("Sandpoint", "", &BuildContext::default());
        let value = serde_json::to_value(&journal).unwrap();
        assert!(value["_id"].is_string());
        assert_eq!(value["pages"][0]["type"], "text");
        assert_eq!(value["pages"][0]["text"]["content"], "");
    }
}
