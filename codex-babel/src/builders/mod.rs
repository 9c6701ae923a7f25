//! Document builders
//!
//! Builders assemble the output documents for the `foundry` format. They never fail: every
//! input has already been normalized, so the only decisions left are layout and ids.

pub mod actor;
pub mod journal;
pub mod markdown;

pub use actor::{build_actor, ActorDocument, ItemDocument};
pub use journal::{build_journal, JournalDocument, JournalPage, PageText};
pub use markdown::{render_markdown, rewrite_wikilinks};

use crate::ids::IdGenerator;
use codex_parser::codex::enriching::{enrich_description, paragraphs};

/// Settings shared by every builder in one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub ids: IdGenerator,
    /// Run ability text and note bodies through the enrichment stages.
    pub enrich: bool,
}

impl BuildContext {
    pub fn new(ids: IdGenerator, enrich: bool) -> Self {
        BuildContext { ids, enrich }
    }

    /// Ability or spell text as paragraph markup, enriched when enabled.
    pub fn description(&self, text: &str) -> String {
        if self.enrich {
            enrich_description(text)
        } else {
            paragraphs(text)
        }
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        BuildContext::new(IdGenerator::default(), true)
    }
}
