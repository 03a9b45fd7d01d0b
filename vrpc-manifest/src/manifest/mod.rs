//! Service manifests: TOML files describing a service and its types.

mod lower;
mod parse;
mod validate;

use std::collections::BTreeMap;

pub use parse::{load, parse_descriptor, parse_manifest};
use serde::Deserialize;
pub use validate::ParseContext;
use vrpc_ir::ServiceDescriptor;

use crate::OutputConfig;

/// A validated service definition plus the options to generate it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub service: ServiceDescriptor,
    pub output: OutputConfig,
}

/// `[service]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ServiceSection {
    pub name: String,
}

/// `{ name = "...", type = "..." }`, used for fields and parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TypedName {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// `[types."Name"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum TypeSection {
    Composite {
        #[serde(default)]
        type_parameters: Vec<String>,
        #[serde(default)]
        fields: Vec<TypedName>,
    },
    Enum {
        members: Vec<String>,
    },
}

impl TypeSection {
    /// Number of type arguments a reference to this type must supply.
    pub fn arity(&self) -> usize {
        match self {
            TypeSection::Composite {
                type_parameters, ..
            } => type_parameters.len(),
            TypeSection::Enum { .. } => 0,
        }
    }
}

/// `[[methods]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MethodSection {
    pub name: String,
    #[serde(default)]
    pub params: Vec<TypedName>,
    pub returns: Option<String>,
}

/// `[[events]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EventSection {
    pub name: String,
    #[serde(default)]
    pub params: Vec<TypedName>,
}

/// The manifest as written, before type expressions are resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawManifest {
    pub service: ServiceSection,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub types: BTreeMap<String, TypeSection>,
    #[serde(default)]
    pub methods: Vec<MethodSection>,
    #[serde(default)]
    pub events: Vec<EventSection>,
}
