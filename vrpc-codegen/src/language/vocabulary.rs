//! Target type vocabularies.

/// The built-in types of a target language and how it spells generic
/// application.
///
/// # Example
///
/// ```
/// use vrpc_codegen::TypeVocabulary;
///
/// fn angle(base: &str, arg: &str) -> String {
///     format!("{}<{}>", base, arg)
/// }
///
/// const TINY: TypeVocabulary = TypeVocabulary {
///     builtins: &[("int", "number"), ("List", "Array")],
///     apply_generic: angle,
///     is_reserved: |name| name == "class",
/// };
///
/// assert_eq!((TINY.apply_generic)("Array", "number"), "Array<number>");
/// assert!((TINY.is_reserved)("class"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeVocabulary {
    /// Source identity to target type name, never declared in output.
    pub builtins: &'static [(&'static str, &'static str)],
    /// Compose a generic base with its single argument (e.g., `Array<T>`).
    pub apply_generic: fn(&str, &str) -> String,
    /// Names a declaration may not take: keywords and globals the generated
    /// file relies on.
    pub is_reserved: fn(&str) -> bool,
}

impl TypeVocabulary {
    /// Look up the target name of a built-in identity.
    pub fn builtin(&self, id: &str) -> Option<&'static str> {
        self.builtins
            .iter()
            .find(|(source, _)| *source == id)
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle(base: &str, arg: &str) -> String {
        format!("{}<{}>", base, arg)
    }

    #[test]
    fn test_builtin_lookup() {
        let vocabulary = TypeVocabulary {
            builtins: &[("int", "number"), ("string", "string")],
            apply_generic: angle,
            is_reserved: |_| false,
        };
        assert_eq!(vocabulary.builtin("int"), Some("number"));
        assert_eq!(vocabulary.builtin("Widget"), None);
    }
}
