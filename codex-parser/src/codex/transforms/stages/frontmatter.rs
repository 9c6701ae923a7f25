//! Frontmatter stages
//!
//! A vault note optionally starts with a yaml block:
//!
//! ```text
//! ---
//! statblock: true
//! name: Goblin Warrior
//! ---
//! Body markdown...
//! ```
//!
//! The block opens with a first line of exactly `---` (a UTF-8 byte order mark before it is
//! ignored) and closes with the next line that is `---` or `...`. Without a closing line the
//! whole text is body.

use crate::codex::transforms::{Runnable, TransformError};
use serde_yaml::{Mapping, Value};

/// Source text split into its frontmatter block and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceParts {
    pub frontmatter: Option<String>,
    pub body: String,
}

/// A note with parsed frontmatter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDocument {
    pub frontmatter: Mapping,
    pub body: String,
}

pub fn split_frontmatter(source: &str) -> SourceParts {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);
    let no_frontmatter = || SourceParts {
        frontmatter: None,
        body: text.to_string(),
    };

    let mut lines = text.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {
            let start = first.len();
            let mut offset = start;
            for line in lines {
                if matches!(line.trim_end(), "---" | "...") {
                    let body = &text[offset + line.len()..];
                    return SourceParts {
                        frontmatter: Some(text[start..offset].to_string()),
                        body: body.trim_start_matches(['\r', '\n']).to_string(),
                    };
                }
                offset += line.len();
            }
            no_frontmatter()
        }
        _ => no_frontmatter(),
    }
}

/// `String → SourceParts`
pub struct SplitFrontmatter;

impl SplitFrontmatter {
    pub fn new() -> Self {
        SplitFrontmatter
    }
}

impl Default for SplitFrontmatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, SourceParts> for SplitFrontmatter {
    fn run(&self, input: String) -> Result<SourceParts, TransformError> {
        Ok(split_frontmatter(&input))
    }
}

/// `SourceParts → RawDocument`
///
/// Invalid yaml fails the stage. Valid yaml that is not a mapping (a bare scalar, an empty
/// block) yields an empty mapping.
pub struct ParseFrontmatter;

impl ParseFrontmatter {
    pub fn new() -> Self {
        ParseFrontmatter
    }
}

impl Default for ParseFrontmatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<SourceParts, RawDocument> for ParseFrontmatter {
    fn run(&self, input: SourceParts) -> Result<RawDocument, TransformError> {
        let frontmatter = match input.frontmatter.as_deref() {
            Some(yaml) if !yaml.trim().is_empty() => {
                match serde_yaml::from_str::<Value>(yaml).map_err(|e| {
                    TransformError::StageFailed {
                        stage: "parse-frontmatter".to_string(),
                        message: e.to_string(),
                    }
                })? {
                    Value::Mapping(map) => map,
                    _ => Mapping::new(),
                }
            }
            _ => Mapping::new(),
        };
        Ok(RawDocument {
            frontmatter,
            body: input.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let parts = split_frontmatter("---\nname: Goblin\n---\n\nBody text\n");
        assert_eq!(parts.frontmatter.as_deref(), Some("name: Goblin\n"));
        assert_eq!(parts.body, "Body text\n");
    }

    #[test]
    fn test_split_with_bom_and_dots() {
        let parts = split_frontmatter("\u{feff}---\r\nname: x\r\n...\r\nrest");
        assert_eq!(parts.frontmatter.as_deref(), Some("name: x\r\n"));
        assert_eq!(parts.body, "rest");
    }

    #[test]
    fn test_no_frontmatter() {
        let parts = split_frontmatter("# Sandpoint\n---\n");
        assert_eq!(parts.frontmatter, None);
        assert_eq!(parts.body, "# Sandpoint\n---\n");
    }

    #[test]
    fn test_unterminated_is_body() {
        let parts = split_frontmatter("---\nname: x\nno closing line");
        assert_eq!(parts.frontmatter, None);
        assert!(parts.body.starts_with("---"));
    }

    #[test]
    fn test_empty_block() {
        let parts = split_frontmatter("---\n---\nbody");
        assert_eq!(parts.frontmatter.as_deref(), Some(""));
        let doc = ParseFrontmatter::new().run(parts).unwrap();
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let parts = SourceParts {
            frontmatter: Some("name: [unclosed\n".to_string()),
            body: String::new(),
        };
        let err = ParseFrontmatter::new().run(parts).unwrap_err();
        assert!(matches!(
            err,
            TransformError::StageFailed { ref stage, .. } if stage == "parse-frontmatter"
        ));
    }

    #[test]
    fn test_parse_scalar_frontmatter() {
        let parts = SourceParts {
            frontmatter: Some("just a string\n".to_string()),
            body: "b".to_string(),
        };
        let doc = ParseFrontmatter::new().run(parts).unwrap();
        assert!(doc.frontmatter.is_empty());
    }
}
