//! Service surface descriptors.

use serde::{Deserialize, Serialize};

use crate::{TypeDescriptor, TypeId, TypeTable, builtin};

/// A named, typed parameter of a method or event handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Name prefixes the source toolchain gives to accessors and operators it
/// synthesizes for properties, events and overloads.
const SYNTHESIZED_PREFIXES: &[&str] = &["get_", "set_", "add_", "remove_", "op_"];

/// Returns true if `name` marks a member the user did not declare directly:
/// property/event accessors, operator overloads and compiler-generated names.
pub fn is_synthesized(name: &str) -> bool {
    SYNTHESIZED_PREFIXES.iter().any(|p| name.starts_with(p))
        || name.contains(['<', '>', '.'])
}

/// A method exposed by the service, in source declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default = "builtin::void")]
    pub returns: TypeId,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: builtin::void(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<TypeId>) -> Self {
        self.parameters.push(ParameterDescriptor::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeId>) -> Self {
        self.returns = ty.into();
        self
    }

    /// True for accessors and compiler-generated members that never reach
    /// generated output.
    pub fn is_synthesized(&self) -> bool {
        is_synthesized(&self.name)
    }
}

/// An event exposed by the service; `parameters` are the handler's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl EventDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<TypeId>) -> Self {
        self.parameters.push(ParameterDescriptor::new(name, ty));
        self
    }
}

/// The public surface of one service plus every type it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub events: Vec<EventDescriptor>,
    #[serde(default = "TypeTable::with_builtins")]
    pub types: TypeTable,
}

impl ServiceDescriptor {
    /// Create an empty service whose type table already knows the built-ins.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            events: Vec::new(),
            types: TypeTable::with_builtins(),
        }
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn event(mut self, event: EventDescriptor) -> Self {
        self.events.push(event);
        self
    }

    pub fn ty(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.insert(descriptor);
        self
    }

    /// Iterate every type identity referenced directly by a method or event,
    /// in declaration order (parameters before the return type).
    pub fn referenced_types(&self) -> impl Iterator<Item = &TypeId> {
        let methods = self.methods.iter().flat_map(|m| {
            m.parameters
                .iter()
                .map(|p| &p.ty)
                .chain(std::iter::once(&m.returns))
        });
        let events = self
            .events
            .iter()
            .flat_map(|e| e.parameters.iter().map(|p| &p.ty));
        methods.chain(events)
    }
}
