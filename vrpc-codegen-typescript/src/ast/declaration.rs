use vrpc_codegen::{CodeFragment, DeclarationKind, Renderable, TypeDeclaration};

use super::{Enum, Interface};

/// A type declaration node: the target form of one entry in the type closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Interface(Interface),
    Enum(Enum),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(i) => i.name(),
            Declaration::Enum(e) => e.name(),
        }
    }
}

impl From<&TypeDeclaration> for Declaration {
    fn from(decl: &TypeDeclaration) -> Self {
        match &decl.kind {
            DeclarationKind::Interface {
                type_parameters,
                fields,
            } => {
                let interface = type_parameters
                    .iter()
                    .fold(Interface::new(&decl.name), |i, p| i.type_parameter(p));
                Declaration::Interface(
                    fields
                        .iter()
                        .fold(interface, |i, f| i.field(&f.name, &f.ty)),
                )
            }
            DeclarationKind::Enum { members } => {
                Declaration::Enum(Enum::new(&decl.name).members(members))
            }
        }
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Declaration::Interface(i) => i.to_fragments(),
            Declaration::Enum(e) => e.to_fragments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use vrpc_codegen::MappedField;
    use vrpc_ir::TypeId;

    use super::*;

    #[test]
    fn test_interface_from_declaration() {
        let decl = TypeDeclaration {
            id: TypeId::new("Acme.Widget"),
            name: "Widget".into(),
            kind: DeclarationKind::Interface {
                type_parameters: vec![],
                fields: vec![MappedField {
                    name: "id".into(),
                    ty: "number".into(),
                }],
            },
        };
        let node = Declaration::from(&decl);
        assert_eq!(node.name(), "Widget");
        assert_eq!(
            node,
            Declaration::Interface(Interface::new("Widget").field("id", "number"))
        );
    }

    #[test]
    fn test_enum_from_declaration() {
        let decl = TypeDeclaration {
            id: TypeId::new("Acme.Color"),
            name: "Color".into(),
            kind: DeclarationKind::Enum {
                members: vec!["Red".into(), "Green".into()],
            },
        };
        assert_eq!(
            Declaration::from(&decl),
            Declaration::Enum(Enum::new("Color").member("Red").member("Green"))
        );
    }
}
