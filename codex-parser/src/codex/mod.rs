//! Main module for codex library functionality

pub mod enriching;
pub mod loader;
pub mod normalizing;
pub mod parsing;
pub mod statblock;
pub mod transforms;
