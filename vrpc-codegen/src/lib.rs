//! Language-neutral code generation engine for the vrpc stub generator.
//!
//! This crate turns a [`ServiceDescriptor`](vrpc_ir::ServiceDescriptor) into
//! the closed set of types a target language has to declare, and provides the
//! writer target generators render their code model with.
//!
//! # Module Organization
//!
//! - [`builder`] - Code writing primitives (CodeBuilder, CodeFragment, Renderable)
//! - [`registry`] - Immutable mapping from source types to target type names
//! - [`closure`] - Transitive type discovery over the service's type graph
//! - [`members`] - Method and event signature extraction
//! - [`language`] - Traits implemented by each target language

pub mod builder;
pub mod closure;
pub mod language;
pub mod members;
pub mod registry;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Indent, LineEnding, Renderable};
pub use closure::{DeclarationKind, MappedField, TypeClosure, TypeDeclaration};
pub use error::{Error, Result};
pub use language::{LanguageCodegen, TypeVocabulary};
pub use members::{ServiceMembers, Signature};
pub use registry::TypeRegistry;
