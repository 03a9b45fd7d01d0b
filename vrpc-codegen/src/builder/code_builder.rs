//! Code builder utility for generating properly indented code.

use std::ops::{Deref, DerefMut};

use super::{CodeFragment, Indent, LineEnding, Renderable};

/// Writer for generated code with scoped indentation.
///
/// Every block opened through [`push_block`](Self::push_block) or
/// [`try_block`](Self::try_block) restores the enclosing indentation depth
/// when its body returns, whether the body succeeded, failed or panicked.
///
/// # Example
///
/// ```
/// use vrpc_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder.push_braced("interface Widget", |b| {
///     b.push_line("id: number;");
/// });
///
/// assert_eq!(builder.build(), "interface Widget {\n    id: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent_unit: String,
    line_ending: LineEnding,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation and line endings.
    pub fn new(indent: Indent, line_ending: LineEnding) -> Self {
        Self {
            indent_level: 0,
            indent_unit: indent.unit(),
            line_ending,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Add raw text without indentation or line terminator.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write `header`, the indented body produced by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.push_line(header);
        {
            let mut scope = self.scope();
            f(&mut *scope);
        }
        self.push_line(close)
    }

    /// Write a brace-delimited block: `header {`, the indented body, `}`.
    pub fn push_braced<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.push_block(&format!("{} {{", header), "}", f)
    }

    /// Like [`push_block`](Self::push_block) with a fallible body.
    ///
    /// On error the closing line is not written, the indentation depth is
    /// restored and the error is returned.
    pub fn try_block<F, E>(&mut self, header: &str, close: &str, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut CodeBuilder) -> Result<(), E>,
    {
        self.push_line(header);
        {
            let mut scope = self.scope();
            f(&mut *scope)?;
        }
        Ok(self.push_line(close))
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                {
                    let mut scope = self.scope();
                    for f in body {
                        scope.apply_fragment(f);
                    }
                }
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn scope(&mut self) -> Scope<'_> {
        let saved = self.indent_level;
        self.indent_level += 1;
        Scope {
            builder: self,
            saved,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default(), LineEnding::default())
    }
}

/// One nesting level; resets the depth it was opened at when dropped.
struct Scope<'a> {
    builder: &'a mut CodeBuilder,
    saved: usize,
}

impl Deref for Scope<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.builder.indent_level = self.saved;
    }
}
