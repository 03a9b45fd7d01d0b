//! TypeScript stub generator.

use indexmap::IndexSet;
use tracing::debug;
use vrpc_codegen::{
    Error, Indent, LanguageCodegen, LineEnding, Result, ServiceMembers, Signature, TypeClosure,
    TypeRegistry,
};
use vrpc_core::{OutputFile, quote, to_identifier};
use vrpc_ir::{ServiceDescriptor, TypeTable};

use crate::{
    ast::{Const, Declaration, EventSignature, Import, Interface, MethodSignature, Param},
    code_file::CodeFile,
    naming::safe_param_name,
    type_mapper::{TS_TYPES, promisify},
};

/// Default file name suffix: `<Service>_vrpc.ts`.
pub const DEFAULT_SUFFIX: &str = "vrpc";

/// TypeScript generator producing one interface definition file per service.
///
/// The generator holds output options only. Every call to
/// [`generate`](LanguageCodegen::generate) starts from a fresh registry.
#[derive(Debug, Clone)]
pub struct Generator {
    suffix: String,
    indent: Indent,
    line_ending: LineEnding,
    imports: Vec<Import>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            indent: Indent::default(),
            line_ending: LineEnding::default(),
            imports: Vec::new(),
        }
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn generate(&self, service: &ServiceDescriptor) -> Result<Vec<OutputFile>> {
        let file = self.generate_file(service)?;
        debug!(
            service = %service.name,
            file = file.file_name(),
            bytes = file.content().len(),
            "generated typescript stub"
        );
        Ok(vec![file])
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name suffix placed between the service name and the extension.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Add an import emitted at the top of every generated file.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    fn generate_file(&self, service: &ServiceDescriptor) -> Result<OutputFile> {
        let service_name = to_identifier(&service.name);
        let members = ServiceMembers::extract(service);
        unique_member_names(&members)?;
        let closure = TypeClosure::resolve(
            &members.seed_types(),
            TypeRegistry::new(TS_TYPES),
            &service.types,
        )?;

        let declarations: Vec<Declaration> =
            closure.declarations.iter().map(Declaration::from).collect();
        let interface =
            service_interface(&service_name, &members, &closure.registry, &service.types)?;
        let methods = methods_const(&service_name, &members);
        let arguments = arguments_const(&service_name, &members);

        let mut exported = IndexSet::new();
        let names = declarations
            .iter()
            .map(Declaration::name)
            .chain([interface.name(), methods.name(), arguments.name()]);
        for name in names {
            if !exported.insert(name.to_string()) {
                return Err(Error::DuplicateDeclaration {
                    name: name.to_string(),
                });
            }
        }

        let content = CodeFile::new()
            .imports(self.imports.iter().cloned())
            .add_all(declarations)
            .add(interface)
            .add(methods)
            .add(arguments)
            .export(exported.into_iter().collect())
            .render_with(self.indent, self.line_ending);

        Ok(OutputFile::new(
            format!("{}_{}.{}", service_name, self.suffix, self.file_extension()),
            content,
        ))
    }
}

/// Overloads and events sharing a method's name would collide as interface
/// members and as keys of the argument map.
fn unique_member_names(members: &ServiceMembers) -> Result<()> {
    let mut seen = IndexSet::new();
    for signature in members.methods.iter().chain(&members.events) {
        if !seen.insert(signature.name.as_str()) {
            return Err(Error::DuplicateDeclaration {
                name: signature.name.clone(),
            });
        }
    }
    Ok(())
}

fn params(signature: &Signature, registry: &TypeRegistry, types: &TypeTable) -> Result<Vec<Param>> {
    signature
        .parameters
        .iter()
        .map(|p| {
            Ok(Param::new(
                safe_param_name(&p.name),
                registry.map(&p.ty, types)?,
            ))
        })
        .collect()
}

/// Promisified methods first, then event registrations.
fn service_interface(
    name: &str,
    members: &ServiceMembers,
    registry: &TypeRegistry,
    types: &TypeTable,
) -> Result<Interface> {
    let mut interface = Interface::new(name);

    for method in &members.methods {
        let returns = match &method.returns {
            Some(ty) => registry.map(ty, types)?,
            None => "void".to_string(),
        };
        let signature = params(method, registry, types)?
            .into_iter()
            .fold(MethodSignature::new(&method.name, promisify(&returns)), |s, p| s.param(p));
        interface = interface.member(signature);
    }

    for event in &members.events {
        let signature = params(event, registry, types)?
            .into_iter()
            .fold(EventSignature::new(&event.name), |s, p| s.param(p));
        interface = interface.member(signature);
    }

    Ok(interface)
}

fn string_array<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let items: Vec<String> = items.into_iter().map(quote).collect();
    format!("[{}]", items.join(", "))
}

/// `const S_methods: Array<keyof S> = [...];` listing methods only.
fn methods_const(service: &str, members: &ServiceMembers) -> Const {
    Const::new(
        format!("{service}_methods"),
        string_array(members.methods.iter().map(|m| m.name.as_str())),
    )
    .ty(format!("Array<keyof {service}>"))
}

/// `const S_arguments = {"m": ["a", "b"]};` with source parameter names.
fn arguments_const(service: &str, members: &ServiceMembers) -> Const {
    let entries: Vec<String> = members
        .methods
        .iter()
        .map(|m| format!("{}: {}", quote(&m.name), string_array(m.parameter_names())))
        .collect();
    Const::new(
        format!("{service}_arguments"),
        format!("{{{}}}", entries.join(", ")),
    )
}
