//! TypeScript code model.
//!
//! A closed set of nodes that describe the generated file. Each node renders
//! itself to [`CodeFragment`](vrpc_codegen::CodeFragment)s; none of them holds
//! a writer or registry after construction.

mod consts;
mod declaration;
mod enums;
mod exports;
mod imports;
mod interface;

pub use consts::Const;
pub use declaration::Declaration;
pub use enums::Enum;
pub use exports::Export;
pub use imports::Import;
pub use interface::{EventSignature, Field, Interface, Member, MethodSignature, Param};
