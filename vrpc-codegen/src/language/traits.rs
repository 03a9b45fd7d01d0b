//! Language-agnostic code generation traits.

use vrpc_core::OutputFile;
use vrpc_ir::ServiceDescriptor;

use crate::Result;

/// Trait for language-specific stub generators.
///
/// Implement this trait to add support for generating stubs in a new language.
/// Implementations must be pure functions of their input: no state may be
/// carried from one `generate` call to the next.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Generate the files describing `service`.
    fn generate(&self, service: &ServiceDescriptor) -> Result<Vec<OutputFile>>;
}
