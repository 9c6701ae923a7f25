//! Area templates: `30-foot cone` → `@Template[type:cone|distance:30]`

use super::protected::replace_outside_annotations;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<distance>\d+)-foot (?P<shape>(?i:cone|burst|emanation|line|square))\b")
        .unwrap()
});

pub fn enrich_templates(text: &str) -> String {
    replace_outside_annotations(text, |segment| {
        TEMPLATE
            .replace_all(segment, |caps: &Captures| {
                format!(
                    "@Template[type:{}|distance:{}]",
                    caps["shape"].to_lowercase(),
                    &caps["distance"]
                )
            })
            .into_owned()
    })
}
