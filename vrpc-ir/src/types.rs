//! Type descriptors.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Stable, unique key for one source type.
///
/// Two descriptors with the same identity describe the same source type.
/// Structurally distinct types must never share an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A named field of a composite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The shape of a source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    /// A primitive with no inner structure.
    Primitive,
    /// A class- or interface-like type with ordered fields.
    Composite {
        /// Names of the type parameters of a generic definition (`Page<T>`).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_parameters: Vec<String>,
        #[serde(default)]
        fields: Vec<FieldDescriptor>,
    },
    /// An enum with ordered symbolic members.
    Enumeration { members: Vec<String> },
    /// A generic construction over its base definition.
    ///
    /// Exactly one argument is supported; other arities are kept so the
    /// generator can reject them.
    Generic {
        base: TypeId,
        arguments: Vec<TypeId>,
    },
    /// A type parameter of a generic definition (`T`).
    Parameter,
}

impl TypeKind {
    /// Short lowercase label, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Primitive => "primitive",
            TypeKind::Composite { .. } => "composite",
            TypeKind::Enumeration { .. } => "enumeration",
            TypeKind::Generic { .. } => "generic",
            TypeKind::Parameter => "parameter",
        }
    }
}

/// Description of one source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub id: TypeId,
    /// The source type's own (possibly qualified) name.
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: TypeId::new(name.clone()),
            name,
            kind: TypeKind::Primitive,
        }
    }

    pub fn composite(
        id: impl Into<TypeId>,
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: TypeKind::Composite {
                type_parameters: Vec::new(),
                fields,
            },
        }
    }

    pub fn enumeration(
        id: impl Into<TypeId>,
        name: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: TypeKind::Enumeration {
                members: members.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// A generic construction; the identity is derived from base and arguments.
    pub fn generic(base: &TypeDescriptor, arguments: &[&TypeDescriptor]) -> Self {
        Self::instantiate(
            base.id.clone(),
            arguments.iter().map(|a| a.id.clone()).collect(),
        )
    }

    /// A generic construction from identities alone: `Base<A, B>`.
    pub fn instantiate(base: TypeId, arguments: Vec<TypeId>) -> Self {
        let args = arguments
            .iter()
            .map(TypeId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let id = format!("{}<{}>", base, args);
        Self {
            id: TypeId::new(id.clone()),
            name: id,
            kind: TypeKind::Generic { base, arguments },
        }
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: TypeId::new(name.clone()),
            name,
            kind: TypeKind::Parameter,
        }
    }

    /// Attach type parameters to a composite definition. No-op for other kinds.
    pub fn with_type_parameters(
        mut self,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        if let TypeKind::Composite {
            type_parameters, ..
        } = &mut self.kind
        {
            *type_parameters = params.into_iter().map(Into::into).collect();
        }
        self
    }
}

/// Lookup table from identity to descriptor.
///
/// Owned by a [`ServiceDescriptor`](crate::ServiceDescriptor); every
/// [`TypeId`] referenced by the service must resolve through it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    types: HashMap<TypeId, TypeDescriptor>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-populated with the built-in descriptors.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for descriptor in crate::builtin::descriptors() {
            table.insert(descriptor);
        }
        table
    }

    /// Insert a descriptor, replacing any previous one with the same identity.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.insert(descriptor.id.clone(), descriptor);
        self
    }

    pub fn get(&self, id: &TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &TypeId) -> bool {
        self.types.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

impl FromIterator<TypeDescriptor> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut table = Self::new();
        for descriptor in iter {
            table.insert(descriptor);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_identity_is_derived() {
        let list = TypeDescriptor::composite("List", "List", Vec::new());
        let widget = TypeDescriptor::composite("Acme.Widget", "Acme.Widget", Vec::new());
        let generic = TypeDescriptor::generic(&list, &[&widget]);

        assert_eq!(generic.id.as_str(), "List<Acme.Widget>");
        assert_eq!(
            generic.kind,
            TypeKind::Generic {
                base: TypeId::new("List"),
                arguments: vec![TypeId::new("Acme.Widget")],
            }
        );
    }

    #[test]
    fn test_with_type_parameters_only_touches_composites() {
        let page =
            TypeDescriptor::composite("Page", "Page", Vec::new()).with_type_parameters(["T"]);
        assert!(matches!(
            page.kind,
            TypeKind::Composite { ref type_parameters, .. } if type_parameters == &["T"]
        ));

        let color =
            TypeDescriptor::enumeration("Color", "Color", ["Red"]).with_type_parameters(["T"]);
        assert!(matches!(color.kind, TypeKind::Enumeration { .. }));
    }

    #[test]
    fn test_table_lookup() {
        let table = TypeTable::with_builtins();
        assert!(table.contains(&TypeId::new("int")));
        assert!(table.get(&TypeId::new("Widget")).is_none());
    }

    #[test]
    fn test_descriptor_json_shape() {
        let widget = TypeDescriptor::composite(
            "Widget",
            "Widget",
            vec![FieldDescriptor::new("id", "int")],
        );
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["kind"], "composite");
        assert_eq!(json["fields"][0]["type"], "int");

        let back: TypeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, widget);
    }
}
