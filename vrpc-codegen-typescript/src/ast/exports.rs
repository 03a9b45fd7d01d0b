//! TypeScript export list.

use vrpc_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `export { a, b };`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Export {
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn names(&self) -> &[String] {
        &self.named
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl FromIterator<String> for Export {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            named: iter.into_iter().collect(),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.named.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::line(format!(
            "export {{ {} }};",
            self.named.join(", ")
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_named() {
        let e = Export::new().named("foo").named("bar").build();
        assert_eq!(e, "export { foo, bar };\n");
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert_eq!(Export::new().build(), "");
    }
}
