//! Deterministic identifiers
//!
//! An id is the SHA-256 of `namespace`, a NUL byte and a key, as lowercase hex truncated to
//! a fixed length. The same key always gives the same id; the namespace keeps two vaults
//! converted into one world from colliding.

use codex_parser::codex::parsing::slugify;
use sha2::{Digest, Sha256};

pub const DEFAULT_NAMESPACE: &str = "codex";
pub const DEFAULT_LENGTH: usize = 16;
const MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    namespace: String,
    length: usize,
}

impl IdGenerator {
    /// `length` is clamped to 1..=64 hex characters.
    pub fn new(namespace: impl Into<String>, length: usize) -> Self {
        IdGenerator {
            namespace: namespace.into(),
            length: length.clamp(1, MAX_LENGTH),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn id(&self, key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.namespace.as_bytes());
        hasher.update([0u8]);
        hasher.update(key.as_bytes());
        let mut id = hex::encode(hasher.finalize());
        id.truncate(self.length);
        id
    }

    pub fn actor_id(&self, name: &str) -> String {
        self.id(&format!("actor/{}", slugify(name)))
    }

    pub fn journal_id(&self, title: &str) -> String {
        self.id(&format!("journal/{}", slugify(title)))
    }

    /// Item ids nest under their actor, so identical items on two creatures differ.
    pub fn item_id(&self, actor_id: &str, kind: &str, index: usize, name: &str) -> String {
        self.id(&format!("{}/{}/{}/{}", actor_id, kind, index, slugify(name)))
    }

    pub fn damage_id(&self, item_id: &str, index: usize) -> String {
        self.id(&format!("{}/damage/{}", item_id, index))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(DEFAULT_NAMESPACE, DEFAULT_LENGTH)
    }
}
