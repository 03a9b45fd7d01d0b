//! Core utilities and types for the vrpc stub generator.
//!
//! This crate provides fundamental helpers shared across the vrpc
//! crates: identifier handling and writing generated files to disk.

mod file;
mod utils;

// File operations
pub use file::{OutputFile, WriteResult};
// String utilities
pub use utils::{is_identifier, quote, simple_name, to_identifier};
