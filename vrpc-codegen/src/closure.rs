//! Transitive type discovery.
//!
//! Starting from the types a service's signatures mention, [`TypeClosure::resolve`]
//! finds every type that has to be declared in the output and builds its
//! declaration exactly once.
//!
//! Each level of the walk registers its whole frontier *before* looking at any
//! member types. A type that refers back to itself, directly or through a
//! chain of fields, is therefore already known when the walk reaches the
//! reference, and the walk terminates on any finite type graph.

use indexmap::IndexSet;
use tracing::{debug, trace};
use vrpc_ir::{TypeId, TypeKind, TypeTable};

use crate::{Error, Result, TypeRegistry, registry::describe};

/// A field of a declared type with its type already mapped to target syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub name: String,
    pub ty: String,
}

/// What a declared type looks like in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// An interface-like type with ordered fields.
    Interface {
        type_parameters: Vec<String>,
        fields: Vec<MappedField>,
    },
    /// An enum with ordered members.
    Enum { members: Vec<String> },
}

/// One type that must be declared in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Source identity.
    pub id: TypeId,
    /// Target name the type was registered under.
    pub name: String,
    pub kind: DeclarationKind,
}

/// The declarations required by a set of seed types, and the registry that
/// knows all of them.
#[derive(Debug, Clone)]
pub struct TypeClosure {
    /// Declarations in discovery order: each type's dependencies first.
    pub declarations: Vec<TypeDeclaration>,
    pub registry: TypeRegistry,
}

impl TypeClosure {
    /// Resolve the closure of `seeds` over `types`, starting from `registry`.
    pub fn resolve<'a>(
        seeds: impl IntoIterator<Item = &'a TypeId>,
        registry: TypeRegistry,
        types: &TypeTable,
    ) -> Result<Self> {
        let seeds: Vec<TypeId> = seeds.into_iter().cloned().collect();
        let mut declarations = Vec::new();
        let registry = resolve_level(&seeds, registry, types, &mut declarations, 0)?;
        debug!(
            declarations = declarations.len(),
            registered = registry.len(),
            "resolved type closure"
        );
        Ok(Self {
            declarations,
            registry,
        })
    }

    /// Target names of every declaration, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.name.as_str())
    }
}

fn resolve_level(
    seeds: &[TypeId],
    mut registry: TypeRegistry,
    types: &TypeTable,
    out: &mut Vec<TypeDeclaration>,
    depth: usize,
) -> Result<TypeRegistry> {
    let mut frontier = IndexSet::new();
    for seed in seeds {
        frontier.extend(registry.unknown_types_of(seed, types)?);
    }
    if frontier.is_empty() {
        return Ok(registry);
    }
    trace!(depth, frontier = ?frontier, "closure frontier");

    // Register the whole frontier first; this is what stops cycles.
    let mut names = Vec::with_capacity(frontier.len());
    for id in &frontier {
        let (next, name) = registry.register(describe(types, id)?);
        registry = next;
        names.push(name);
    }

    for (id, name) in frontier.into_iter().zip(names) {
        let descriptor = describe(types, &id)?;
        let kind = match &descriptor.kind {
            TypeKind::Composite {
                type_parameters,
                fields,
            } => {
                let field_types: Vec<TypeId> = fields.iter().map(|f| f.ty.clone()).collect();
                registry = resolve_level(&field_types, registry, types, out, depth + 1)?;
                let fields = fields
                    .iter()
                    .map(|f| {
                        Ok(MappedField {
                            name: f.name.clone(),
                            ty: registry.map(&f.ty, types)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                DeclarationKind::Interface {
                    type_parameters: type_parameters.clone(),
                    fields,
                }
            }
            TypeKind::Enumeration { members } => DeclarationKind::Enum {
                members: members.clone(),
            },
            other => {
                return Err(Error::UnmappableType {
                    id,
                    kind: other.as_str(),
                });
            }
        };
        out.push(TypeDeclaration { id, name, kind });
    }

    Ok(registry)
}
