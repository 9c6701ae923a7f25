//! Text enrichment pipeline
//!
//!     Ability and spell descriptions are authored as markdown-flavored plain text. Enrichment
//!     rewrites them into the paragraph markup the rendering host expects, with inline
//!     annotation tokens it expands into interactive elements:
//!
//!         @Check[<save>|dc:<n>[|basic]]
//!         @Damage[<formula>[<type>]]          formula parenthesized when it has a modifier
//!         @Template[type:<shape>|distance:<n>]
//!         @UUID[Compendium.pf2e.conditionitems.Item.<Name>]{<authored text>}
//!
//!     The token encodings are a compatibility contract and must not change.
//!
//! Stages
//!
//!     Each stage is a plain `&str -> String` function, applied in the fixed order of
//!     [`STAGES`]:
//!
//!         checks → damage → templates → valued conditions → valueless conditions → structure
//!
//!     The order matters: later patterns must never see text that an earlier stage already
//!     turned into a token. Tokens are additionally protected by [`protected`], so every stage
//!     is idempotent on its own output. A stage with nothing to match returns its input
//!     byte for byte.

pub mod checks;
pub mod conditions;
pub mod damage;
pub mod protected;
pub mod structure;
pub mod templates;

pub use checks::enrich_checks;
pub use conditions::{enrich_conditions, enrich_valued_conditions, enrich_valueless_conditions};
pub use damage::{enrich_damage, DAMAGE_TYPES};
pub use structure::{format_structure, paragraphs};
pub use templates::enrich_templates;

/// A named text stage.
pub type Stage = (&'static str, fn(&str) -> String);

/// All stages, in application order.
pub static STAGES: &[Stage] = &[
    ("checks", enrich_checks),
    ("damage", enrich_damage),
    ("templates", enrich_templates),
    ("valued-conditions", enrich_valued_conditions),
    ("valueless-conditions", enrich_valueless_conditions),
    ("structure", format_structure),
];

/// The inline stages: everything except paragraph structure.
pub fn inline_stages() -> &'static [Stage] {
    &STAGES[..STAGES.len() - 1]
}

fn run(text: &str, stages: &[Stage]) -> String {
    stages.iter().fold(text.to_string(), |text, (name, stage)| {
        let out = stage(&text);
        if out != text {
            tracing::trace!(stage = *name, "enrichment stage rewrote text");
        }
        out
    })
}

/// Enrich a description into paragraph markup. Blank input gives an empty string.
pub fn enrich_description(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    run(text, STAGES)
}

/// Annotation stages only, for text that already has its markup (rendered markdown). Only
/// the html text runs are enriched; tags, links and code stay as they are.
pub fn enrich_inline(text: &str) -> String {
    protected::replace_outside_tags(text, |segment| run(segment, inline_stages()))
}
