use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the file content and name so error factories don't need them
/// threaded through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the first quoted occurrence of `text` (`"text"` or `'text'`).
    pub fn find_quoted(&self, text: &str) -> Option<SourceSpan> {
        [format!("\"{text}\""), format!("'{text}'")]
            .iter()
            .find_map(|needle| self.src.find(needle.as_str()))
            .map(|pos| SourceSpan::from((pos + 1, text.len())))
    }

    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn undeclared_type_error(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::UndeclaredType {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn shadows_builtin_error(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::ShadowsBuiltin {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn type_expression_error(
        &self,
        expression: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeExpression {
            src: self.named_source(),
            span,
            expression: expression.into(),
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(vrpc::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse service manifest")]
    #[diagnostic(code(vrpc::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse service descriptor")]
    #[diagnostic(code(vrpc::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(vrpc::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(vrpc::invalid_identifier),
        help("{reason}. Use only letters, digits, '_' and '$', starting with a letter, '_' or '$'.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("type '{name}' is not declared")]
    #[diagnostic(
        code(vrpc::undeclared_type),
        help("declare it under [types.\"{name}\"] or use a built-in type: int, long, short, byte, float, double, decimal, bool, char, string, void, object, List<T>")
    )]
    UndeclaredType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("type '{name}' shadows a built-in type")]
    #[diagnostic(
        code(vrpc::shadows_builtin),
        help("give the type a qualified name, e.g. 'MyApp.{name}'")
    )]
    ShadowsBuiltin {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid type expression '{expression}': {message}")]
    #[diagnostic(
        code(vrpc::invalid_type_expression),
        help("type expressions look like 'Name' or 'Name<Arg, ...>'")
    )]
    InvalidTypeExpression {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        expression: String,
        message: String,
    },
}
