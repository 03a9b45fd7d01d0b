//! Shared string utilities for code generation.

/// Strip namespace qualifiers and generic arity markers from a source type name
/// (e.g., "Acme.Models.Widget" -> "Widget", "Page`1" -> "Page", "Outer+Inner" -> "Inner").
pub fn simple_name(source: &str) -> &str {
    let unqualified = source
        .rsplit(['.', '+', ':'])
        .next()
        .unwrap_or(source);
    match unqualified.find('`') {
        Some(idx) => &unqualified[..idx],
        None => unqualified,
    }
}

/// Check whether `s` is a valid identifier: a letter, `_` or `$` followed by
/// letters, digits, `_` or `$`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Convert a source type name into a valid identifier
/// (e.g., "Acme.Widget" -> "Widget", "Result-Set" -> "Result_Set").
pub fn to_identifier(source: &str) -> String {
    let mut result: String = simple_name(source)
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Wrap a string in double quotes, escaping backslashes and quotes.
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("Widget"), "Widget");
        assert_eq!(simple_name("Acme.Models.Widget"), "Widget");
        assert_eq!(simple_name("Outer+Inner"), "Inner");
        assert_eq!(simple_name("acme::Widget"), "Widget");
        assert_eq!(simple_name("Page`1"), "Page");
        assert_eq!(simple_name(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("getName"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("get-name"));
        assert!(!is_identifier("a.b"));
    }

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("Acme.Widget"), "Widget");
        assert_eq!(to_identifier("Result-Set"), "Result_Set");
        assert_eq!(to_identifier("Page`1"), "Page");
        assert_eq!(to_identifier("3D"), "_3D");
        assert_eq!(to_identifier(""), "_");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("getName"), "\"getName\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}
