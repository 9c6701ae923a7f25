//! Format registry for format discovery and selection

use crate::builders::BuildContext;
use crate::error::FormatError;
use crate::format::Format;
use codex_parser::codex::transforms::stages::VaultEntry;
use serde_json::Value;
use std::collections::HashMap;

/// Registry of output formats, keyed by name.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let doc = registry.serialize(&entry, "foundry", &BuildContext::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize an entry using the named format
    pub fn serialize(
        &self,
        entry: &VaultEntry,
        format: &str,
        ctx: &BuildContext,
    ) -> Result<Value, FormatError> {
        self.get(format)?.serialize(entry, ctx)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::foundry::FoundryFormat);
        registry.register(crate::formats::statblock::StatblockFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
