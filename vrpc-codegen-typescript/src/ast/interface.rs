//! TypeScript interface builder.

use vrpc_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A typed parameter of a method or handler signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A property of an interface: `name: Type;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("{}: {};", self.name, self.ty)
    }
}

/// A method signature: `name(a: A, b: B): R;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: String,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: returns.into(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    fn render(&self) -> String {
        format!("{}({}): {};", self.name, param_list(&self.params), self.returns)
    }
}

/// An event registration: `name(handler: (a: A) => void): void;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSignature {
    pub name: String,
    pub params: Vec<Param>,
}

impl EventSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    fn render(&self) -> String {
        format!(
            "{}(handler: ({}) => void): void;",
            self.name,
            param_list(&self.params)
        )
    }
}

/// A member of an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Method(MethodSignature),
    Event(EventSignature),
}

impl Member {
    fn render(&self) -> String {
        match self {
            Member::Field(f) => f.render(),
            Member::Method(m) => m.render(),
            Member::Event(e) => e.render(),
        }
    }
}

impl From<Field> for Member {
    fn from(value: Field) -> Self {
        Member::Field(value)
    }
}

impl From<MethodSignature> for Member {
    fn from(value: MethodSignature) -> Self {
        Member::Method(value)
    }
}

impl From<EventSignature> for Member {
    fn from(value: EventSignature) -> Self {
        Member::Event(value)
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    type_parameters: Vec<String>,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a type parameter (`interface Page<T>`).
    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Add a property.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.members.push(Field::new(name, ty).into());
        self
    }

    /// Add any member.
    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    fn header(&self) -> String {
        if self.type_parameters.is_empty() {
            format!("interface {}", self.name)
        } else {
            format!(
                "interface {}<{}>",
                self.name,
                self.type_parameters.join(", ")
            )
        }
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            vec![CodeFragment::line(format!("{} {{}}", self.header()))]
        } else {
            let body = self
                .members
                .iter()
                .map(|m| CodeFragment::line(m.render()))
                .collect();
            vec![CodeFragment::braced(self.header(), body)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Person")
            .field("name", "string")
            .field("age", "number")
            .build();
        assert_eq!(
            i,
            "interface Person {\n    name: string;\n    age: number;\n}\n"
        );
    }

    #[test]
    fn test_generic_interface_header() {
        let i = Interface::new("Page")
            .type_parameter("T")
            .field("items", "Array<T>")
            .build();
        assert!(i.starts_with("interface Page<T> {\n"));
    }

    #[test]
    fn test_method_signature() {
        let m = MethodSignature::new("getName", "Promise<string>")
            .param(Param::new("id", "number"))
            .param(Param::new("full", "boolean"));
        assert_eq!(
            m.render(),
            "getName(id: number, full: boolean): Promise<string>;"
        );
        assert_eq!(
            MethodSignature::new("ping", "Promise<void>").render(),
            "ping(): Promise<void>;"
        );
    }

    #[test]
    fn test_event_signature() {
        let e = EventSignature::new("onClick")
            .param(Param::new("x", "number"))
            .param(Param::new("y", "number"));
        assert_eq!(
            e.render(),
            "onClick(handler: (x: number, y: number) => void): void;"
        );
        assert_eq!(
            EventSignature::new("onReady").render(),
            "onReady(handler: () => void): void;"
        );
    }

    #[test]
    fn test_member_order_is_preserved() {
        let i = Interface::new("Svc")
            .member(MethodSignature::new("a", "Promise<void>"))
            .member(EventSignature::new("onB"))
            .build();
        let a = i.find("a(").unwrap();
        let b = i.find("onB(").unwrap();
        assert!(a < b);
    }
}
