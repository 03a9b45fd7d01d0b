//! Immutable registry of source types and their target names.
//!
//! A [`TypeRegistry`] is a persistent value: [`extend`](TypeRegistry::extend)
//! and [`register`](TypeRegistry::register) return a new registry layered over
//! the receiver, which stays untouched. Registries share their history through
//! `Arc`, so cloning is cheap and independent generation runs may hold their
//! own registries on different threads.

use std::sync::Arc;

use tracing::debug;
use vrpc_core::to_identifier;
use vrpc_ir::{TypeDescriptor, TypeId, TypeKind, TypeTable};

use crate::{Error, Result, TypeVocabulary};

/// Mapping from source type identity to target type name.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    vocabulary: TypeVocabulary,
    head: Option<Arc<Registration>>,
    len: usize,
}

#[derive(Debug)]
struct Registration {
    id: TypeId,
    name: String,
    previous: Option<Arc<Registration>>,
}

impl TypeRegistry {
    /// Create a registry that knows only the vocabulary's built-ins.
    pub fn new(vocabulary: TypeVocabulary) -> Self {
        Self {
            vocabulary,
            head: None,
            len: 0,
        }
    }

    /// Target name recorded for `id`, built-in or registered.
    pub fn lookup(&self, id: &TypeId) -> Option<&str> {
        if let Some(name) = self.vocabulary.builtin(id.as_str()) {
            return Some(name);
        }
        self.registrations()
            .find(|r| &r.id == id)
            .map(|r| r.name.as_str())
    }

    /// True if `id` is a built-in or has been registered.
    pub fn is_known(&self, id: &TypeId) -> bool {
        self.lookup(id).is_some()
    }

    /// True if `id` belongs to the built-in seed.
    pub fn is_builtin(&self, id: &TypeId) -> bool {
        self.vocabulary.builtin(id.as_str()).is_some()
    }

    /// Target syntax naming the type `id`.
    ///
    /// Known types return their recorded name. Generic constructions are
    /// composed from their mapped base and argument without being registered.
    /// Any other unknown type gets a name derived from its source name.
    pub fn map(&self, id: &TypeId, types: &TypeTable) -> Result<String> {
        if let Some(name) = self.lookup(id) {
            return Ok(name.to_string());
        }
        let descriptor = describe(types, id)?;
        match &descriptor.kind {
            TypeKind::Generic { base, .. } => {
                let argument = single_argument(descriptor)?;
                let base = self.map(base, types)?;
                let argument = self.map(argument, types)?;
                Ok((self.vocabulary.apply_generic)(&base, &argument))
            }
            TypeKind::Parameter => Ok(descriptor.name.clone()),
            _ => Ok(to_identifier(&descriptor.name)),
        }
    }

    /// The not-yet-known types that `id` consists of.
    ///
    /// A generic construction contributes the unknown parts of its base and
    /// its argument independently; any other type contributes itself if unknown.
    pub fn unknown_types_of(&self, id: &TypeId, types: &TypeTable) -> Result<Vec<TypeId>> {
        if self.is_known(id) {
            return Ok(Vec::new());
        }
        let descriptor = describe(types, id)?;
        match &descriptor.kind {
            TypeKind::Generic { base, .. } => {
                let argument = single_argument(descriptor)?;
                let mut unknown = self.unknown_types_of(base, types)?;
                unknown.extend(self.unknown_types_of(argument, types)?);
                Ok(unknown)
            }
            TypeKind::Parameter => Ok(Vec::new()),
            _ => Ok(vec![id.clone()]),
        }
    }

    /// A new registry that additionally maps `id` to `name`.
    pub fn extend(&self, id: TypeId, name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(id = %id, name = %name, "registering type");
        Self {
            vocabulary: self.vocabulary,
            head: Some(Arc::new(Registration {
                id,
                name,
                previous: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Register `descriptor` under the name derived from its source name.
    ///
    /// If another type already owns that name, a numeric suffix is appended
    /// (`Widget2`, `Widget3`, ...). Returns the new registry and the chosen name.
    pub fn register(&self, descriptor: &TypeDescriptor) -> (Self, String) {
        let base = to_identifier(&descriptor.name);
        let mut name = base.clone();
        let mut suffix = 2;
        while self.name_in_use(&name) {
            name = format!("{}{}", base, suffix);
            suffix += 1;
        }
        (self.extend(descriptor.id.clone(), name.clone()), name)
    }

    /// Registered target names excluding built-ins, in registration order.
    pub fn non_builtin_entries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registrations().map(|r| r.name.as_str()).collect();
        names.reverse();
        names
    }

    /// Number of registered (non-built-in) types.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn name_in_use(&self, name: &str) -> bool {
        (self.vocabulary.is_reserved)(name)
            || self.vocabulary.builtins.iter().any(|(_, target)| *target == name)
            || self.registrations().any(|r| r.name == name)
    }

    fn registrations(&self) -> impl Iterator<Item = &Registration> {
        std::iter::successors(self.head.as_deref(), |r| r.previous.as_deref())
    }
}

/// Look up the descriptor for `id`.
pub(crate) fn describe<'t>(types: &'t TypeTable, id: &TypeId) -> Result<&'t TypeDescriptor> {
    types
        .get(id)
        .ok_or_else(|| Error::UnknownTypeReference { id: id.clone() })
}

fn single_argument(descriptor: &TypeDescriptor) -> Result<&TypeId> {
    match &descriptor.kind {
        TypeKind::Generic { arguments, .. } if arguments.len() == 1 => Ok(&arguments[0]),
        TypeKind::Generic { arguments, .. } => Err(Error::AmbiguousGenericArgument {
            id: descriptor.id.clone(),
            count: arguments.len(),
        }),
        _ => Err(Error::UnmappableType {
            id: descriptor.id.clone(),
            kind: descriptor.kind.as_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use vrpc_ir::FieldDescriptor;

    use super::*;

    fn angle(base: &str, arg: &str) -> String {
        format!("{}<{}>", base, arg)
    }

    const VOCABULARY: TypeVocabulary = TypeVocabulary {
        builtins: &[
            ("int", "number"),
            ("string", "string"),
            ("List", "Array"),
        ],
        apply_generic: angle,
        is_reserved: |name| name == "class" || name == "Promise",
    };

    fn table() -> TypeTable {
        let list = TypeDescriptor::composite("List", "List", Vec::new());
        let widget = TypeDescriptor::composite(
            "Acme.Widget",
            "Acme.Widget",
            vec![FieldDescriptor::new("id", "int")],
        );
        let page = TypeDescriptor::composite("Page", "Page`1", Vec::new()).with_type_parameters(["T"]);
        let int = TypeDescriptor::primitive("int");
        let list_of_widget = TypeDescriptor::generic(&list, &[&widget]);
        let page_of_widget = TypeDescriptor::generic(&page, &[&widget]);
        let list_of_int = TypeDescriptor::generic(&list, &[&int]);
        let pair = TypeDescriptor::generic(&list, &[&int, &widget]);
        [
            list,
            widget,
            page,
            int,
            list_of_widget,
            page_of_widget,
            list_of_int,
            pair,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_builtins_are_known() {
        let registry = TypeRegistry::new(VOCABULARY);
        assert!(registry.is_known(&"int".into()));
        assert!(registry.is_builtin(&"List".into()));
        assert!(!registry.is_known(&"Acme.Widget".into()));
        assert!(registry.non_builtin_entries().is_empty());
    }

    #[test]
    fn test_map_builtin_and_derived_names() {
        let registry = TypeRegistry::new(VOCABULARY);
        let types = table();
        assert_eq!(registry.map(&"int".into(), &types).unwrap(), "number");
        assert_eq!(
            registry.map(&"Acme.Widget".into(), &types).unwrap(),
            "Widget"
        );
        assert_eq!(registry.map(&"Page".into(), &types).unwrap(), "Page");
    }

    #[test]
    fn test_map_generic_composes_without_registration() {
        let registry = TypeRegistry::new(VOCABULARY);
        let types = table();
        assert_eq!(
            registry.map(&"List<Acme.Widget>".into(), &types).unwrap(),
            "Array<Widget>"
        );
        assert_eq!(
            registry.map(&"List<int>".into(), &types).unwrap(),
            "Array<number>"
        );
        assert!(!registry.is_known(&"List<Acme.Widget>".into()));
    }

    #[test]
    fn test_map_prefers_registered_name() {
        let types = table();
        let registry = TypeRegistry::new(VOCABULARY).extend("Acme.Widget".into(), "Gadget");
        assert_eq!(
            registry.map(&"List<Acme.Widget>".into(), &types).unwrap(),
            "Array<Gadget>"
        );
    }

    #[test]
    fn test_unknown_types_of_generic_splits_base_and_argument() {
        let registry = TypeRegistry::new(VOCABULARY);
        let types = table();

        let unknown = registry
            .unknown_types_of(&"Page<Acme.Widget>".into(), &types)
            .unwrap();
        assert_eq!(unknown, vec![TypeId::new("Page"), TypeId::new("Acme.Widget")]);

        let unknown = registry
            .unknown_types_of(&"List<int>".into(), &types)
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_unknown_types_of_known_type_is_empty() {
        let types = table();
        let registry = TypeRegistry::new(VOCABULARY).extend("Acme.Widget".into(), "Widget");
        assert!(
            registry
                .unknown_types_of(&"Acme.Widget".into(), &types)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_extend_does_not_mutate_receiver() {
        let base = TypeRegistry::new(VOCABULARY);
        let extended = base.extend("Acme.Widget".into(), "Widget");

        assert!(!base.is_known(&"Acme.Widget".into()));
        assert!(extended.is_known(&"Acme.Widget".into()));
        assert_eq!(base.len(), 0);
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn test_non_builtin_entries_in_registration_order() {
        let registry = TypeRegistry::new(VOCABULARY)
            .extend("A".into(), "A")
            .extend("B".into(), "B")
            .extend("C".into(), "C");
        assert_eq!(registry.non_builtin_entries(), ["A", "B", "C"]);
    }

    #[test]
    fn test_register_disambiguates_colliding_names() {
        let first = TypeDescriptor::composite("Acme.Widget", "Acme.Widget", Vec::new());
        let second = TypeDescriptor::composite("Other.Widget", "Other.Widget", Vec::new());
        let array = TypeDescriptor::composite("Acme.Array", "Acme.Array", Vec::new());

        let registry = TypeRegistry::new(VOCABULARY);
        let (registry, a) = registry.register(&first);
        let (registry, b) = registry.register(&second);
        let (registry, c) = registry.register(&array);

        assert_eq!(a, "Widget");
        assert_eq!(b, "Widget2");
        assert_eq!(c, "Array2");
        assert_eq!(registry.lookup(&"Other.Widget".into()), Some("Widget2"));
    }

    #[test]
    fn test_register_avoids_reserved_names() {
        let keyword = TypeDescriptor::enumeration("Acme.class", "Acme.class", ["A"]);
        let promise = TypeDescriptor::composite("Acme.Promise", "Acme.Promise", Vec::new());

        let registry = TypeRegistry::new(VOCABULARY);
        let (registry, a) = registry.register(&keyword);
        let (registry, b) = registry.register(&promise);

        assert_eq!(a, "class2");
        assert_eq!(b, "Promise2");
        assert_eq!(registry.non_builtin_entries(), vec!["class2", "Promise2"]);
    }

    #[test]
    fn test_generic_with_two_arguments_is_rejected() {
        let registry = TypeRegistry::new(VOCABULARY);
        let types = table();
        let err = registry
            .map(&"List<int, Acme.Widget>".into(), &types)
            .unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousGenericArgument {
                id: "List<int, Acme.Widget>".into(),
                count: 2,
            }
        );
    }

    #[test]
    fn test_unknown_reference_is_reported() {
        let registry = TypeRegistry::new(VOCABULARY);
        let err = registry
            .unknown_types_of(&"Missing".into(), &table())
            .unwrap_err();
        assert_eq!(err, Error::UnknownTypeReference { id: "Missing".into() });
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TypeRegistry>();
    }
}
