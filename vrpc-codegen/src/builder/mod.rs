//! Code generation building blocks.
//!
//! This module provides the core primitives for writing code:
//! - [`CodeBuilder`] - Writer with scoped indentation
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for code model nodes that render to fragments
//! - [`Indent`], [`LineEnding`] - Output formatting configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::{Indent, LineEnding};
pub use renderable::{CodeFragment, Renderable};
