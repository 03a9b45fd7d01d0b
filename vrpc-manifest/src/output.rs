//! `[output]` section: generator selection and rendering options.

use serde::Deserialize;

/// Generator used when the manifest names none.
pub const DEFAULT_GENERATOR: &str = "typescript";
/// File name suffix used when the manifest names none.
pub const DEFAULT_SUFFIX: &str = "vrpc";
/// Indent width used when the manifest names none.
pub const DEFAULT_INDENT: u8 = 4;

/// Line terminator written to generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    #[default]
    Lf,
    Crlf,
}

/// A namespace import emitted at the top of each generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Local binding (`rpc` in `import * as rpc from "./runtime"`).
    pub name: String,
    /// Module specifier.
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub generator: String,
    pub suffix: String,
    /// Spaces per indent level; `0` selects tabs.
    pub indent: u8,
    pub line_endings: LineEndings,
    pub imports: Vec<ImportConfig>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            indent: DEFAULT_INDENT,
            line_endings: LineEndings::default(),
            imports: Vec::new(),
        }
    }
}
