//! Validation context and identifier checks for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source for error reporting and the current path through the
/// manifest (e.g. `["getName"]` while checking that method's parameters).
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "inspector.toml");
/// ctx.validate_name("getName", "method")?;
///
/// let nested = ctx.push("getName");
/// nested.validate_name("id", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Describe `kind` at the current path, e.g. "parameter in 'getName'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that `name` is a plain identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_problem(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Validate a dotted name (`Acme.Widget`): every segment an identifier.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        let problem = name.split('.').find_map(identifier_problem);
        match problem {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }
}

/// Why `name` is not an identifier, or `None` if it is one.
pub(crate) fn identifier_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name is empty");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("name starts with a digit");
    }
    if !vrpc_core::is_identifier(name) {
        return Some("name contains characters that are not allowed");
    }
    None
}

/// Find the span of a name in the TOML or JSON source.
///
/// Tries the places a name is written: a table header (`[types.Name]`,
/// `[types."Name"]`) and a quoted string value.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let headers = [
        (format!(".{}]", name), 1usize),
        (format!(".\"{}\"]", name), 2usize),
    ];
    for (pattern, skip) in &headers {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    [format!("\"{}\"", name), format!("'{}'", name)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_problem() {
        assert_eq!(identifier_problem("getName"), None);
        assert_eq!(identifier_problem("_x$"), None);
        assert_eq!(identifier_problem(""), Some("name is empty"));
        assert_eq!(identifier_problem("1st"), Some("name starts with a digit"));
        assert_eq!(
            identifier_problem("get-name"),
            Some("name contains characters that are not allowed")
        );
    }

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[types.Color]\nkind = \"enum\"";
        assert_eq!(find_name_span(src, "Color"), Some(SourceSpan::from((7, 5))));

        let src = "[types.\"Acme.Widget\"]";
        assert_eq!(
            find_name_span(src, "Acme.Widget"),
            Some(SourceSpan::from((8, 11)))
        );
    }

    #[test]
    fn test_find_name_span_value() {
        let src = "[[methods]]\nname = \"get-name\"";
        assert_eq!(
            find_name_span(src, "get-name"),
            Some(SourceSpan::from((20, 8)))
        );
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "svc.toml");
        assert_eq!(ctx.context_for("method"), "method");
        assert_eq!(ctx.push("getName").context_for("parameter"), "parameter in 'getName'");
    }

    #[test]
    fn test_validate_qualified_name() {
        let ctx = ParseContext::new("", "svc.toml");
        assert!(ctx.validate_qualified_name("Acme.Widget", "type").is_ok());
        assert!(ctx.validate_qualified_name("Acme..Widget", "type").is_err());
    }
}
