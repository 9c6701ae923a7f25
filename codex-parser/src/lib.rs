//! # codex
//!
//! Statblock normalization and ability-text enrichment for turning a markdown vault of
//! creatures and lore into compendium documents.
//!
//! File Layout
//!
//!     The library is a stack of pure, synchronous layers. Each layer only consumes the ones
//!     listed above it:
//!
//! src/codex
//!   ├── statblock      The normalized record types (CreatureStatblock, Strike, ...)
//!   ├── parsing        Primitive parsers for the small authored grammars (senses, speed,
//!   │                  attack names/descriptions, damage strings)
//!   ├── normalizing    Loosely-typed frontmatter → CreatureStatblock
//!   ├── enriching      Ability text → annotated paragraph markup
//!   ├── transforms     Composable source → entry pipeline (frontmatter split, yaml, classify)
//!   └── loader         DocumentLoader, the entry point used by the CLI and tests
//!
//!     Nothing in the parsing, normalizing or enriching layers returns an error: malformed
//!     authoring data degrades to documented defaults. Only the transform pipeline can fail,
//!     when a file's frontmatter is not valid yaml at all.

pub mod codex;
