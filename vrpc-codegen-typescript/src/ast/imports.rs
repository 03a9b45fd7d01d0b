//! TypeScript import builder.

use vrpc_codegen::{CodeBuilder, CodeFragment, Renderable};

/// What an import statement binds.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    /// `import * as name from "m";`
    Namespace(String),
    /// `import { a, b } from "m";`
    Named(Vec<String>),
}

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    binding: Binding,
}

impl Import {
    /// Namespace import of the whole module.
    pub fn namespace(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            binding: Binding::Namespace(name.into()),
        }
    }

    /// Start a named import; add names with [`Import::named`].
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            binding: Binding::Named(Vec::new()),
        }
    }

    /// Import a named export. Turns a namespace import into a named one.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        match &mut self.binding {
            Binding::Named(names) => names.push(name.into()),
            Binding::Namespace(_) => self.binding = Binding::Named(vec![name.into()]),
        }
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.binding {
            Binding::Namespace(name) => format!("import * as {} from \"{}\";", name, self.from),
            Binding::Named(names) if names.is_empty() => format!("import \"{}\";", self.from),
            Binding::Named(names) => {
                format!("import {{ {} }} from \"{}\";", names.join(", "), self.from)
            }
        };
        vec![CodeFragment::line(line)]
    }
}
