//! Unified generator dispatch.
//!
//! Centralizes generator lookup by name and the options each one accepts.

use eyre::{Result, bail};
use vrpc_codegen::{Indent, LanguageCodegen, LineEnding, TypeVocabulary};
use vrpc_codegen_typescript::{Generator as TypeScriptGenerator, Import, TS_TYPES};
use vrpc_manifest::{LineEndings, OutputConfig};

/// Names accepted by `--generator` and `[output] generator`.
pub const AVAILABLE: &[&str] = &["typescript"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    TypeScript,
}

/// Generator support for one target language.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Look up a generator by name.
    pub fn get(name: &str) -> Result<Self> {
        let language = match name.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Language::TypeScript,
            _ => bail!(
                "unknown generator '{}' (available: {})",
                name,
                AVAILABLE.join(", ")
            ),
        };
        Ok(Self { language })
    }

    /// Type vocabulary the generator seeds its registry with.
    pub fn vocabulary(&self) -> TypeVocabulary {
        match self.language {
            Language::TypeScript => TS_TYPES,
        }
    }

    /// Create a generator configured from the manifest's output options.
    pub fn generator(&self, output: &OutputConfig) -> Box<dyn LanguageCodegen> {
        let line_ending = match output.line_endings {
            LineEndings::Lf => LineEnding::Lf,
            LineEndings::Crlf => LineEnding::CrLf,
        };
        match self.language {
            Language::TypeScript => Box::new(
                output.imports.iter().fold(
                    TypeScriptGenerator::new()
                        .suffix(&output.suffix)
                        .indent(Indent::from_width(output.indent))
                        .line_ending(line_ending),
                    |generator, import| {
                        generator.import(Import::namespace(&import.name, &import.from))
                    },
                ),
            ),
        }
    }
}
