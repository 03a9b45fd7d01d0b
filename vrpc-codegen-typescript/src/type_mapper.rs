//! TypeScript type vocabulary.

use vrpc_codegen::TypeVocabulary;
use vrpc_ir::builtin;

use crate::naming::is_reserved;

/// The global wrapper every method result is returned in.
const PROMISE: &str = "Promise";

fn angle_brackets(base: &str, arg: &str) -> String {
    format!("{}<{}>", base, arg)
}

/// Built-in types of TypeScript and its generic application syntax.
pub const TS_TYPES: TypeVocabulary = TypeVocabulary {
    builtins: &[
        (builtin::INT, "number"),
        (builtin::LONG, "number"),
        (builtin::SHORT, "number"),
        (builtin::BYTE, "number"),
        (builtin::FLOAT, "number"),
        (builtin::DOUBLE, "number"),
        (builtin::DECIMAL, "number"),
        (builtin::STRING, "string"),
        (builtin::CHAR, "string"),
        (builtin::BOOL, "boolean"),
        (builtin::VOID, "void"),
        (builtin::OBJECT, "any"),
        (builtin::LIST, "Array"),
    ],
    apply_generic: angle_brackets,
    is_reserved: is_reserved_type_name,
};

/// Keywords cannot name a declaration, and a local `Promise` would shadow
/// the one every method signature returns.
fn is_reserved_type_name(name: &str) -> bool {
    is_reserved(name) || name == PROMISE
}

/// Wrap a return type in the asynchronous result of a remote call.
pub fn promisify(ty: &str) -> String {
    angle_brackets(PROMISE, ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_is_mapped() {
        for id in builtin::PRIMITIVES {
            assert!(TS_TYPES.builtin(id).is_some(), "{} is not mapped", id);
        }
        assert_eq!(TS_TYPES.builtin(builtin::LIST), Some("Array"));
    }

    #[test]
    fn test_typescript_primitives() {
        assert_eq!(TS_TYPES.builtin("int"), Some("number"));
        assert_eq!(TS_TYPES.builtin("long"), Some("number"));
        assert_eq!(TS_TYPES.builtin("string"), Some("string"));
        assert_eq!(TS_TYPES.builtin("bool"), Some("boolean"));
        assert_eq!(TS_TYPES.builtin("void"), Some("void"));
        assert_eq!(TS_TYPES.builtin("object"), Some("any"));
    }

    #[test]
    fn test_generic_syntax() {
        assert_eq!((TS_TYPES.apply_generic)("Array", "number"), "Array<number>");
        assert_eq!(promisify("string"), "Promise<string>");
    }

    #[test]
    fn test_reserved_type_names() {
        assert!((TS_TYPES.is_reserved)("class"));
        assert!((TS_TYPES.is_reserved)("Promise"));
        assert!(!(TS_TYPES.is_reserved)("Widget"));
    }
}
