//! Check operation - service validation and type closure listing.

use std::path::Path;

use eyre::{Context, Result};
use vrpc_codegen::{ServiceMembers, TypeClosure, TypeRegistry};
use vrpc_manifest::Manifest;

use crate::{language::LanguageSupport, reports::CheckReport};

/// Execute the check operation.
///
/// Resolves the service's type closure without generating any code, so
/// every error generation would hit for the type graph surfaces here.
pub fn check(
    manifest: &Manifest,
    language: &LanguageSupport,
    config_path: &Path,
) -> Result<CheckReport> {
    let service = &manifest.service;
    let members = ServiceMembers::extract(service);
    let closure = TypeClosure::resolve(
        &members.seed_types(),
        TypeRegistry::new(language.vocabulary()),
        &service.types,
    )
    .wrap_err("Type resolution failed")?;

    let skipped = service
        .methods
        .iter()
        .filter(|m| m.is_synthesized())
        .map(|m| m.name.clone())
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        service: service.name.clone(),
        methods: members.methods.iter().map(|m| m.name.clone()).collect(),
        events: members.events.iter().map(|e| e.name.clone()).collect(),
        skipped,
        types: closure
            .registry
            .non_builtin_entries()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use vrpc_ir::{FieldDescriptor, MethodDescriptor, ServiceDescriptor, TypeDescriptor};
    use vrpc_manifest::OutputConfig;

    use super::*;

    #[test]
    fn test_check_lists_closure_in_registration_order() {
        let service = ServiceDescriptor::new("Svc")
            .ty(TypeDescriptor::composite(
                "Acme.Widget",
                "Acme.Widget",
                vec![FieldDescriptor::new("gadget", "Acme.Gadget")],
            ))
            .ty(TypeDescriptor::composite("Acme.Gadget", "Acme.Gadget", vec![]))
            .method(MethodDescriptor::new("get").returns("Acme.Widget"))
            .method(MethodDescriptor::new("get_Value"));
        let manifest = Manifest {
            service,
            output: OutputConfig::default(),
        };
        let language = LanguageSupport::get("typescript").unwrap();

        let report = check(&manifest, &language, Path::new("svc.json")).unwrap();
        assert_eq!(report.types, vec!["Widget", "Gadget"]);
        assert_eq!(report.methods, vec!["get"]);
        assert_eq!(report.skipped, vec!["get_Value"]);
    }

    #[test]
    fn test_check_fails_on_unknown_reference() {
        let manifest = Manifest {
            service: ServiceDescriptor::new("Svc")
                .method(MethodDescriptor::new("get").returns("Missing")),
            output: OutputConfig::default(),
        };
        let language = LanguageSupport::get("typescript").unwrap();
        assert!(check(&manifest, &language, Path::new("svc.json")).is_err());
    }
}
