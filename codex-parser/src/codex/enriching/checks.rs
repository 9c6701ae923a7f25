//! Saving throw checks: `DC 18 basic Reflex save` → `@Check[reflex|dc:18|basic] save`

use super::protected::replace_outside_annotations;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CHECK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bDC (?P<dc>\d+) (?:(?P<basic>(?i:basic)) )?(?P<save>(?i:fortitude|reflex|will)) (?P<word>(?i:saving throw|save))",
    )
    .unwrap()
});

/// Annotate saving throw checks. The trailing `save`/`saving throw` is kept verbatim.
pub fn enrich_checks(text: &str) -> String {
    replace_outside_annotations(text, |segment| {
        CHECK
            .replace_all(segment, |caps: &Captures| {
                let basic = if caps.name("basic").is_some() { "|basic" } else { "" };
                format!(
                    "@Check[{}|dc:{}{}] {}",
                    caps["save"].to_lowercase(),
                    &caps["dc"],
                    basic,
                    &caps["word"]
                )
            })
            .into_owned()
    })
}
