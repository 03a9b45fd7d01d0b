//! Resolve a parsed manifest into a [`ServiceDescriptor`].
//!
//! Every type expression becomes a [`TypeId`]; each distinct generic
//! expression gets one `Generic` descriptor in the service's type table.

use std::collections::{BTreeMap, HashSet};

use vrpc_ir::{
    EventDescriptor, FieldDescriptor, MethodDescriptor, ParameterDescriptor, ServiceDescriptor,
    TypeDescriptor, TypeId, TypeKind, TypeTable, builtin,
};

use super::{RawManifest, TypeSection, TypedName, validate::ParseContext};
use crate::{
    Result,
    type_expr::{ExprError, TypeExpr},
};

/// Type parameters visible while resolving the fields of a generic definition.
#[derive(Clone, Copy)]
struct Scope<'s> {
    owner: &'s str,
    params: &'s [String],
}

struct Lowering<'a> {
    ctx: &'a ParseContext<'a>,
    declared: &'a BTreeMap<String, TypeSection>,
    table: TypeTable,
}

pub(crate) fn lower(raw: &RawManifest, ctx: &ParseContext<'_>) -> Result<ServiceDescriptor> {
    ctx.validate_qualified_name(&raw.service.name, "service")?;

    let mut lowering = Lowering {
        ctx,
        declared: &raw.types,
        table: TypeTable::with_builtins(),
    };

    for (name, section) in &raw.types {
        let descriptor = lowering.declare(name, section)?;
        lowering.table.insert(descriptor);
    }

    let mut member_names = HashSet::new();
    let mut methods = Vec::with_capacity(raw.methods.len());
    for method in &raw.methods {
        lowering.check_member_name(&method.name, "method", &mut member_names)?;
        let returns = match &method.returns {
            Some(text) => lowering.resolve(text, None)?,
            None => builtin::void(),
        };
        methods.push(MethodDescriptor {
            name: method.name.clone(),
            parameters: lowering.parameters(&method.name, &method.params)?,
            returns,
        });
    }

    let mut events = Vec::with_capacity(raw.events.len());
    for event in &raw.events {
        lowering.check_member_name(&event.name, "event", &mut member_names)?;
        events.push(EventDescriptor {
            name: event.name.clone(),
            parameters: lowering.parameters(&event.name, &event.params)?,
        });
    }

    Ok(ServiceDescriptor {
        name: raw.service.name.clone(),
        methods,
        events,
        types: lowering.table,
    })
}

impl Lowering<'_> {
    fn declare(&mut self, name: &str, section: &TypeSection) -> Result<TypeDescriptor> {
        let outer = self.ctx;
        let source = outer.source();
        if builtin::is_builtin(name) {
            return Err(source.shadows_builtin_error(name, self.ctx.find_span(name)));
        }
        self.ctx.validate_qualified_name(name, "type")?;
        let ctx = self.ctx.push(name);

        match section {
            TypeSection::Composite {
                type_parameters,
                fields,
            } => {
                for param in type_parameters {
                    ctx.validate_name(param, "type parameter")?;
                }
                let scope = Scope {
                    owner: name,
                    params: type_parameters,
                };
                let mut seen = HashSet::new();
                let mut mapped = Vec::with_capacity(fields.len());
                for field in fields {
                    ctx.validate_name(&field.name, "field")?;
                    if !seen.insert(field.name.as_str()) {
                        return Err(source.validation_error_at(
                            format!("field '{}' is declared more than once in '{}'", field.name, name),
                            self.ctx.find_span(&field.name),
                        ));
                    }
                    mapped.push(FieldDescriptor::new(
                        &field.name,
                        self.resolve(&field.ty, Some(scope))?,
                    ));
                }
                Ok(TypeDescriptor::composite(name, name, mapped)
                    .with_type_parameters(type_parameters))
            }
            TypeSection::Enum { members } => {
                let mut seen = HashSet::new();
                for member in members {
                    ctx.validate_name(member, "enum member")?;
                    if !seen.insert(member.as_str()) {
                        return Err(source.validation_error_at(
                            format!("member '{}' appears more than once in '{}'", member, name),
                            self.ctx.find_span(member),
                        ));
                    }
                }
                Ok(TypeDescriptor::enumeration(name, name, members))
            }
        }
    }

    fn check_member_name<'n>(
        &self,
        name: &'n str,
        kind: &str,
        seen: &mut HashSet<&'n str>,
    ) -> Result<()> {
        self.ctx.validate_name(name, kind)?;
        if !seen.insert(name) {
            return Err(self.ctx.source().validation_error_at(
                format!("'{}' is declared more than once", name),
                self.ctx.find_span(name),
            ));
        }
        Ok(())
    }

    fn parameters(&mut self, owner: &str, params: &[TypedName]) -> Result<Vec<ParameterDescriptor>> {
        let ctx = self.ctx.push(owner);
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(params.len());
        for param in params {
            ctx.validate_name(&param.name, "parameter")?;
            if !seen.insert(param.name.as_str()) {
                return Err(self.ctx.source().validation_error_at(
                    format!("parameter '{}' appears more than once in '{}'", param.name, owner),
                    self.ctx.find_span(&param.name),
                ));
            }
            out.push(ParameterDescriptor::new(
                &param.name,
                self.resolve(&param.ty, None)?,
            ));
        }
        Ok(out)
    }

    /// Parse a type expression and resolve it to an identity.
    fn resolve(&mut self, text: &str, scope: Option<Scope<'_>>) -> Result<TypeId> {
        let expr: TypeExpr = text.parse().map_err(|e: ExprError| {
            self.ctx.source().type_expression_error(
                text,
                e.message,
                self.ctx.source().find_quoted(text),
            )
        })?;
        self.lower_expr(&expr, text, scope)
    }

    fn arity(&self, name: &str) -> Option<usize> {
        if name == builtin::LIST {
            Some(1)
        } else if builtin::is_builtin(name) {
            Some(0)
        } else {
            self.declared.get(name).map(TypeSection::arity)
        }
    }

    fn lower_expr(
        &mut self,
        expr: &TypeExpr,
        text: &str,
        scope: Option<Scope<'_>>,
    ) -> Result<TypeId> {
        let outer = self.ctx;
        let source = outer.source();
        let span = source.find_quoted(text);

        if let Some(scope) = scope.filter(|s| s.params.contains(&expr.name)) {
            if expr.is_generic() {
                return Err(source.type_expression_error(
                    text,
                    format!("type parameter '{}' takes no type arguments", expr.name),
                    span,
                ));
            }
            let descriptor = TypeDescriptor {
                id: TypeId::new(format!("{}::{}", scope.owner, expr.name)),
                name: expr.name.clone(),
                kind: TypeKind::Parameter,
            };
            let id = descriptor.id.clone();
            self.table.insert(descriptor);
            return Ok(id);
        }

        let Some(arity) = self.arity(&expr.name) else {
            return Err(source.undeclared_type_error(
                &expr.name,
                source.find_quoted(&expr.name).or(span),
            ));
        };
        if expr.args.len() != arity {
            let message = match arity {
                0 => format!("'{}' takes no type arguments", expr.name),
                1 => format!("'{}' expects 1 type argument", expr.name),
                n => format!("'{}' expects {} type arguments", expr.name, n),
            };
            return Err(source.type_expression_error(text, message, span));
        }
        if !expr.is_generic() {
            return Ok(TypeId::new(&expr.name));
        }

        let arguments = expr
            .args
            .iter()
            .map(|arg| self.lower_expr(arg, text, scope))
            .collect::<Result<Vec<_>>>()?;
        let descriptor = TypeDescriptor::instantiate(TypeId::new(&expr.name), arguments);
        let id = descriptor.id.clone();
        self.table.insert(descriptor);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use vrpc_ir::TypeKind;

    use crate::{Error, Manifest};

    fn parse(src: &str) -> Manifest {
        src.parse().unwrap()
    }

    fn parse_err(src: &str) -> Box<Error> {
        src.parse::<Manifest>().unwrap_err()
    }

    const SERVICE: &str = "[service]\nname = \"Inspector\"\n";

    #[test]
    fn test_minimal_manifest() {
        let manifest = parse(SERVICE);
        assert_eq!(manifest.service.name, "Inspector");
        assert!(manifest.service.methods.is_empty());
        assert!(manifest.service.types.contains(&"int".into()));
        assert_eq!(manifest.output.generator, "typescript");
    }

    #[test]
    fn test_methods_and_events() {
        let manifest = parse(&format!(
            r#"{SERVICE}
            [[methods]]
            name = "getName"
            params = [{{ name = "id", type = "int" }}]
            returns = "string"

            [[methods]]
            name = "ping"

            [[events]]
            name = "onClick"
            params = [{{ name = "x", type = "int" }}, {{ name = "y", type = "int" }}]
            "#
        ));
        let service = &manifest.service;
        assert_eq!(service.methods[0].name, "getName");
        assert_eq!(service.methods[0].parameters[0].ty.as_str(), "int");
        assert_eq!(service.methods[0].returns.as_str(), "string");
        assert_eq!(service.methods[1].returns.as_str(), "void");
        assert_eq!(service.events[0].parameters.len(), 2);
    }

    #[test]
    fn test_generic_expressions_become_descriptors() {
        let manifest = parse(&format!(
            r#"{SERVICE}
            [types."Acme.Widget"]
            kind = "composite"
            fields = [{{ name = "children", type = "List<Acme.Widget>" }}]
            "#
        ));
        let types = &manifest.service.types;
        let list = types.get(&"List<Acme.Widget>".into()).unwrap();
        assert_eq!(
            list.kind,
            TypeKind::Generic {
                base: "List".into(),
                arguments: vec!["Acme.Widget".into()],
            }
        );
    }

    #[test]
    fn test_type_parameters_are_scoped() {
        let manifest = parse(&format!(
            r#"{SERVICE}
            [types.Page]
            kind = "composite"
            type_parameters = ["T"]
            fields = [{{ name = "items", type = "List<T>" }}]

            [[methods]]
            name = "list"
            returns = "Page<int>"
            "#
        ));
        let types = &manifest.service.types;
        assert_eq!(
            types.get(&"Page::T".into()).map(|d| &d.kind),
            Some(&TypeKind::Parameter)
        );
        assert!(types.contains(&"List<Page::T>".into()));
        assert!(types.contains(&"Page<int>".into()));
    }

    #[test]
    fn test_enum_declaration() {
        let manifest = parse(&format!(
            "{SERVICE}[types.Color]\nkind = \"enum\"\nmembers = [\"Red\", \"Green\"]\n"
        ));
        let color = manifest.service.types.get(&"Color".into()).unwrap();
        assert_eq!(
            color.kind,
            TypeKind::Enumeration {
                members: vec!["Red".into(), "Green".into()]
            }
        );
    }

    #[test]
    fn test_undeclared_type() {
        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\nreturns = \"Widget\"\n"
        ));
        assert!(matches!(*err, Error::UndeclaredType { ref name, .. } if name == "Widget"));
    }

    #[test]
    fn test_builtin_shadowing() {
        let err = parse_err(&format!(
            "{SERVICE}[types.string]\nkind = \"enum\"\nmembers = []\n"
        ));
        assert!(matches!(*err, Error::ShadowsBuiltin { ref name, .. } if name == "string"));
    }

    #[test]
    fn test_bad_expressions() {
        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\nreturns = \"List<int\"\n"
        ));
        assert!(matches!(*err, Error::InvalidTypeExpression { .. }));

        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\nreturns = \"List\"\n"
        ));
        assert!(
            matches!(*err, Error::InvalidTypeExpression { ref message, .. } if message == "'List' expects 1 type argument")
        );

        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\nreturns = \"int<string>\"\n"
        ));
        assert!(
            matches!(*err, Error::InvalidTypeExpression { ref message, .. } if message == "'int' takes no type arguments")
        );
    }

    #[test]
    fn test_invalid_names() {
        let err = parse_err("[service]\nname = \"my-service\"\n");
        assert!(matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "service"));

        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\nparams = [{{ name = \"1st\", type = \"int\" }}]\n"
        ));
        assert!(
            matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "parameter in 'get'")
        );
    }

    #[test]
    fn test_duplicate_member_names() {
        let err = parse_err(&format!(
            "{SERVICE}[[methods]]\nname = \"get\"\n[[events]]\nname = \"get\"\n"
        ));
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let err = parse_err(&format!("{SERVICE}[extra]\nkey = 1\n"));
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
