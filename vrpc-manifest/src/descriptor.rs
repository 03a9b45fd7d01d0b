//! Validation of JSON-serialized service descriptors.

use std::collections::HashSet;

use vrpc_ir::{ServiceDescriptor, TypeId, TypeKind, TypeTable, builtin};

use crate::{ParseContext, Result};

/// Check a deserialized descriptor before it reaches a generator.
///
/// Missing built-ins are added to the type table. Every referenced identity
/// must be described and no generic construction may contain itself.
/// Member names must be unique identifiers; synthesized methods are left
/// for the generator to drop.
pub(crate) fn validate_descriptor(
    service: &mut ServiceDescriptor,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    for descriptor in builtin::descriptors() {
        if !service.types.contains(&descriptor.id) {
            service.types.insert(descriptor);
        }
    }

    ctx.validate_qualified_name(&service.name, "service")?;
    let mut seen = HashSet::new();
    for method in service.methods.iter().filter(|m| !m.is_synthesized()) {
        check_member_name(&method.name, "method", &mut seen, ctx)?;
        let nested = ctx.push(&method.name);
        for param in &method.parameters {
            nested.validate_name(&param.name, "parameter")?;
        }
    }
    for event in &service.events {
        check_member_name(&event.name, "event", &mut seen, ctx)?;
        let nested = ctx.push(&event.name);
        for param in &event.parameters {
            nested.validate_name(&param.name, "parameter")?;
        }
    }

    let types = &service.types;
    for id in service.referenced_types() {
        require(types, id, ctx)?;
    }
    for descriptor in types.iter() {
        for id in references(&descriptor.kind) {
            require(types, id, ctx)?;
        }
    }

    for descriptor in types.iter() {
        if let TypeKind::Generic { .. } = descriptor.kind {
            let mut stack = Vec::new();
            if contains_itself(types, &descriptor.id, &mut stack) {
                return Err(ctx.source().validation_error_at(
                    format!("generic type '{}' contains itself", descriptor.id),
                    ctx.find_span(descriptor.id.as_str()),
                ));
            }
        }
    }

    Ok(())
}

fn check_member_name<'n>(
    name: &'n str,
    kind: &str,
    seen: &mut HashSet<&'n str>,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    ctx.validate_name(name, kind)?;
    if !seen.insert(name) {
        return Err(ctx.source().validation_error_at(
            format!("'{}' is declared more than once", name),
            ctx.find_span(name),
        ));
    }
    Ok(())
}

fn require(types: &TypeTable, id: &TypeId, ctx: &ParseContext<'_>) -> Result<()> {
    if types.contains(id) {
        Ok(())
    } else {
        Err(ctx
            .source()
            .undeclared_type_error(id.as_str(), ctx.find_span(id.as_str())))
    }
}

/// Identities a descriptor refers to.
fn references(kind: &TypeKind) -> Vec<&TypeId> {
    match kind {
        TypeKind::Composite { fields, .. } => fields.iter().map(|f| &f.ty).collect(),
        TypeKind::Generic { base, arguments } => {
            std::iter::once(base).chain(arguments.iter()).collect()
        }
        TypeKind::Primitive | TypeKind::Enumeration { .. } | TypeKind::Parameter => Vec::new(),
    }
}

/// True if following generic base/argument edges from `id` leads back to a
/// generic already on `stack`. Composites end the walk: their fields are
/// reached through registration, not through generic composition.
fn contains_itself<'t>(types: &'t TypeTable, id: &'t TypeId, stack: &mut Vec<&'t TypeId>) -> bool {
    let Some(descriptor) = types.get(id) else {
        return false;
    };
    let TypeKind::Generic { base, arguments } = &descriptor.kind else {
        return false;
    };
    if stack.contains(&id) {
        return true;
    }
    stack.push(id);
    let found = std::iter::once(base)
        .chain(arguments.iter())
        .any(|next| contains_itself(types, next, stack));
    stack.pop();
    found
}
