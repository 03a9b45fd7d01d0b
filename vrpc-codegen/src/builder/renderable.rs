//! Fragments produced by code model nodes.
//!
//! Nodes describe their shape; only the [`CodeBuilder`](super::CodeBuilder)
//! knows about indentation and line endings.

/// A piece of generated code, independent of formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line; the terminator is added when written.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, a body one level deeper, then an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// `header {`, the body, then `}`.
    pub fn braced(header: impl AsRef<str>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: format!("{} {{", header.as_ref()),
            body,
            close: Some("}".to_string()),
        }
    }
}

/// A code model node that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
