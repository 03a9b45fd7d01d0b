//! CodeFile abstraction for structured TypeScript file generation.
//!
//! A generated file has three sections: imports, body and exports. Sections
//! are separated by one blank line and so are body elements.

use vrpc_codegen::{CodeBuilder, CodeFragment, Indent, LineEnding, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```ignore
/// let text = CodeFile::new()
///     .import(Import::namespace("rpc", "./runtime"))
///     .add(interface)
///     .export(Export::new().named("Inspector"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        if !export.is_empty() {
            self.exports.push(export);
        }
        self
    }

    /// Render with 4-space indentation and LF line endings.
    pub fn render(&self) -> String {
        self.render_with(Indent::default(), LineEnding::default())
    }

    pub fn render_with(&self, indent: Indent, line_ending: LineEnding) -> String {
        let mut builder = CodeBuilder::new(indent, line_ending);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}
