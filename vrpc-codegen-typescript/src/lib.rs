//! TypeScript target for the vrpc stub generator.
//!
//! Turns a [`ServiceDescriptor`](vrpc_ir::ServiceDescriptor) into a single
//! `<Service>_vrpc.ts` file declaring every type the service reaches, a
//! promisified service interface, and the two reflection constants the
//! calling runtime uses to dispatch methods by name.
//!
//! # Usage
//!
//! ```ignore
//! use vrpc_codegen::LanguageCodegen;
//! use vrpc_codegen_typescript::{Generator, Import};
//!
//! let generator = Generator::new().import(Import::namespace("rpc", "./runtime"));
//! for file in generator.generate(&service)? {
//!     file.write(Path::new("out"))?;
//! }
//! ```

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use ast::{Const, Declaration, Enum, EventSignature, Export, Import, Interface, MethodSignature};
pub use code_file::CodeFile;
pub use generator::{DEFAULT_SUFFIX, Generator};
pub use naming::{is_reserved, safe_param_name};
pub use type_mapper::{TS_TYPES, promisify};
pub use vrpc_codegen::LanguageCodegen;
