//! TypeScript enum builder.

use vrpc_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `enum Name { A, B, }` with one member per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    name: String,
    members: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    pub fn members(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.members.extend(names.into_iter().map(Into::into));
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

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("enum {}", self.name);
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("{header} {{}}"))];
        }
        let body = self
            .members
            .iter()
            .map(|m| CodeFragment::line(format!("{m},")))
            .collect();
        vec![CodeFragment::braced(header, body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_members() {
        let e = Enum::new("Color").member("Red").member("Green").build();
        assert_eq!(e, "enum Color {\n    Red,\n    Green,\n}\n");
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Nothing").build(), "enum Nothing {}\n");
    }
}
