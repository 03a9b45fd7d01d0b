//! Language-specific abstractions.
//!
//! This module provides the seams a target language plugs into:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeVocabulary`] - Built-in type table and generic syntax of a target

mod traits;
mod vocabulary;

pub use traits::LanguageCodegen;
pub use vocabulary::TypeVocabulary;
