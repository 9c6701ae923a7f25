//! Format trait definition
//!
//! Every output format converts one classified vault entry into a json document. Formats
//! that only handle one kind of entry return `FormatError::NotSupported` for the other.

use crate::builders::BuildContext;
use crate::error::FormatError;
use codex_parser::codex::transforms::stages::VaultEntry;
use serde_json::Value;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct NameOnly;
///
/// impl Format for NameOnly {
///     fn name(&self) -> &str {
///         "name-only"
///     }
///
///     fn serialize(&self, entry: &VaultEntry, _ctx: &BuildContext) -> Result<Value, FormatError> {
///         Ok(Value::from(entry.name()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "foundry", "statblock")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Serialize an entry into its output document.
    fn serialize(&self, entry: &VaultEntry, ctx: &BuildContext) -> Result<Value, FormatError>;
}
