//! TypeScript const declaration builder.

use vrpc_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A module-level constant: `const name = value;` or `const name: T = value;`.
///
/// Constants are never exported inline; the file's trailing export list
/// names them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.ty {
            Some(ty) => format!("const {}: {} = {};", self.name, ty, self.value),
            None => format!("const {} = {};", self.name, self.value),
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untyped_const() {
        assert_eq!(Const::new("answer", "42").build(), "const answer = 42;\n");
    }

    #[test]
    fn test_typed_const() {
        let c = Const::new("S_methods", "[\"a\"]")
            .ty("Array<keyof S>")
            .build();
        assert_eq!(c, "const S_methods: Array<keyof S> = [\"a\"];\n");
    }
}
