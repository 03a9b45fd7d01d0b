//! Intermediate representation types for the vrpc stub generator.
//!
//! This crate provides the language-neutral description of a service's
//! public surface: the methods and events it exposes and every type those
//! members reference.
//!
//! # Architecture
//!
//! ```text
//! host reflection / manifest → vrpc-ir (descriptors) → vrpc-codegen (closure) → target generator
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Serializable, so a host adapter can hand them over as plain data
//! - Graph-friendly: types reference each other by [`TypeId`], which lets
//!   self- and mutually-referential types be described without ownership cycles

pub mod builtin;
mod service;
mod types;

pub use service::{
    EventDescriptor, MethodDescriptor, ParameterDescriptor, ServiceDescriptor, is_synthesized,
};
pub use types::{FieldDescriptor, TypeDescriptor, TypeId, TypeKind, TypeTable};
