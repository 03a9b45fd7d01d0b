//! Well-known identities for built-in source types.
//!
//! Host adapters map their native primitives onto these identities so every
//! target generator can seed its registry from one shared vocabulary.

use crate::{TypeDescriptor, TypeId};

pub const INT: &str = "int";
pub const LONG: &str = "long";
pub const SHORT: &str = "short";
pub const BYTE: &str = "byte";
pub const FLOAT: &str = "float";
pub const DOUBLE: &str = "double";
pub const DECIMAL: &str = "decimal";
pub const BOOL: &str = "bool";
pub const CHAR: &str = "char";
pub const STRING: &str = "string";
pub const VOID: &str = "void";
pub const OBJECT: &str = "object";
/// The single-argument list template (`List<T>`).
pub const LIST: &str = "List";

/// Every built-in primitive identity (the list template excluded).
pub const PRIMITIVES: &[&str] = &[
    INT, LONG, SHORT, BYTE, FLOAT, DOUBLE, DECIMAL, BOOL, CHAR, STRING, VOID, OBJECT,
];

/// Returns true if `name` is a built-in identity, including the list template.
pub fn is_builtin(name: &str) -> bool {
    name == LIST || PRIMITIVES.contains(&name)
}

/// Descriptors for every built-in identity, ready to be inserted into a
/// [`TypeTable`](crate::TypeTable).
pub fn descriptors() -> impl Iterator<Item = TypeDescriptor> {
    PRIMITIVES
        .iter()
        .map(|name| TypeDescriptor::primitive(*name))
        .chain(std::iter::once(
            TypeDescriptor::composite(LIST, LIST, Vec::new()).with_type_parameters(["T"]),
        ))
}

/// Identity of the built-in void type.
pub fn void() -> TypeId {
    TypeId::new(VOID)
}
