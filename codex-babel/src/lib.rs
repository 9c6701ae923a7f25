//! Compendium documents for codex entries
//!
//!     This crate turns classified vault entries (creatures and lore notes) into output
//!     documents. It is a pure lib: it powers codex-cli but supposes no shell, so nothing here
//!     prints, reads env vars or touches the file system.
//!
//! Architecture
//!
//!     - Format trait: one uniform `serialize(entry, ctx)` interface per output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Builders: the actor and journal documents the `foundry` format emits
//!     - IdGenerator: deterministic ids, so regenerating unchanged input yields identical ids
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ids.rs                  # Deterministic document and item ids
//!     ├── builders
//!     │   ├── actor.rs            # CreatureStatblock → actor document with items
//!     │   ├── journal.rs          # Lore note → journal document
//!     │   └── markdown.rs         # Note bodies → html (comrak), wikilinks → links
//!     ├── formats
//!     │   ├── foundry             # Actor / journal json
//!     │   └── statblock           # The normalized record as json
//!     └── lib.rs
//!
//! Identifiers
//!
//!     Every id is derived from a stable key: `actor/<slug>`, `journal/<slug>`, and for items
//!     `<actor id>/<kind>/<index>/<slug>`. Re-running a conversion on unchanged notes therefore
//!     updates documents in place instead of creating duplicates.

pub mod builders;
pub mod error;
pub mod format;
pub mod formats;
pub mod ids;
pub mod registry;

pub use builders::BuildContext;
pub use error::FormatError;
pub use format::Format;
pub use ids::IdGenerator;
pub use registry::FormatRegistry;
