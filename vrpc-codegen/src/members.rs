//! Method and event signature extraction.

use indexmap::IndexSet;
use vrpc_ir::{ParameterDescriptor, ServiceDescriptor, TypeId};

/// A method or event signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    /// `None` for event registrations.
    pub returns: Option<TypeId>,
}

impl Signature {
    /// Parameter names in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }
}

/// The callable surface of a service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceMembers {
    /// User-declared methods, in declaration order.
    pub methods: Vec<Signature>,
    /// Event registrations, in declaration order.
    pub events: Vec<Signature>,
}

impl ServiceMembers {
    /// Extract methods and events from `service`, dropping synthesized members.
    pub fn extract(service: &ServiceDescriptor) -> Self {
        let methods = service
            .methods
            .iter()
            .filter(|m| !m.is_synthesized())
            .map(|m| Signature {
                name: m.name.clone(),
                parameters: m.parameters.clone(),
                returns: Some(m.returns.clone()),
            })
            .collect();

        let events = service
            .events
            .iter()
            .map(|e| Signature {
                name: e.name.clone(),
                parameters: e.parameters.clone(),
                returns: None,
            })
            .collect();

        Self { methods, events }
    }

    /// Every type the signatures mention, without repeats, in first-use order.
    pub fn seed_types(&self) -> Vec<TypeId> {
        let mut seeds = IndexSet::new();
        for signature in self.methods.iter().chain(&self.events) {
            seeds.extend(signature.parameters.iter().map(|p| p.ty.clone()));
            seeds.extend(signature.returns.iter().cloned());
        }
        seeds.into_iter().collect()
    }
}
