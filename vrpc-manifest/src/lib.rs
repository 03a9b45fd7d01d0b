//! Service definitions for the vrpc stub generator.
//!
//! A service is described either by a TOML manifest:
//!
//! ```toml
//! [service]
//! name = "Inspector"
//!
//! [types."Acme.Widget"]
//! kind = "composite"
//! fields = [{ name = "id", type = "int" }]
//!
//! [[methods]]
//! name = "get"
//! params = [{ name = "id", type = "int" }]
//! returns = "Acme.Widget"
//! ```
//!
//! or by a JSON-serialized [`ServiceDescriptor`](vrpc_ir::ServiceDescriptor).
//! Both are validated into a [`Manifest`]; failures are [`miette`] diagnostics
//! pointing into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod manifest;
mod output;
mod type_expr;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, ParseContext, load, parse_descriptor, parse_manifest};
pub use output::{
    DEFAULT_GENERATOR, DEFAULT_INDENT, DEFAULT_SUFFIX, ImportConfig, LineEndings, OutputConfig,
};
pub use type_expr::{ExprError, TypeExpr};
