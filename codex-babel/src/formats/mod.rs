//! Format implementations
//!
//! Each format converts a classified vault entry into one json document.

pub mod foundry;
pub mod statblock;

pub use foundry::FoundryFormat;
pub use statblock::StatblockFormat;
