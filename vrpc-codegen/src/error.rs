use thiserror::Error;
use vrpc_ir::TypeId;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while generating code for one service.
///
/// Generation is deterministic, so none of these are retryable: the host
/// decides whether to skip the service or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A type that is neither built-in, composite nor enumeration reached
    /// the declaration step.
    #[error("type '{id}' of kind {kind} has no built-in mapping and cannot be declared")]
    UnmappableType { id: TypeId, kind: &'static str },

    /// A generic construction without exactly one type argument.
    #[error("generic type '{id}' has {count} type arguments; exactly one is supported")]
    AmbiguousGenericArgument { id: TypeId, count: usize },

    /// A type identity that the service's type table does not describe.
    #[error("type '{id}' is referenced but not described")]
    UnknownTypeReference { id: TypeId },

    /// Two top-level declarations in one output file share a name.
    #[error("'{name}' is declared more than once in the generated file")]
    DuplicateDeclaration { name: String },
}
