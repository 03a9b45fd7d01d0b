//! Type expressions: `Name` or `Name<Arg, ...>`.

use std::{fmt, str::FromStr};

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub name: String,
    pub args: Vec<TypeExpr>,
}

/// Why an expression failed to parse, and the byte offset where it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprError {
    pub message: String,
    pub offset: usize,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

/// Canonical form: arguments separated by `", "`, no other whitespace.
impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.is_generic() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for TypeExpr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { src: s, pos: 0 };
        let expr = parser.expr()?;
        parser.skip_whitespace();
        if parser.pos < s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(expr)
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, message: &str) -> ExprError {
        ExprError {
            message: message.to_string(),
            offset: self.pos,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|&c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn name(&mut self) -> Result<String, ExprError> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self
            .peek()
            .filter(|&c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.'))
        {
            self.pos += c.len_utf8();
        }
        if start == self.pos {
            return Err(self.error("expected a type name"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn expr(&mut self) -> Result<TypeExpr, ExprError> {
        let name = self.name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.expr()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }
        Ok(TypeExpr { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TypeExpr {
        s.parse().unwrap()
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(parse("Acme.Widget"), TypeExpr::named("Acme.Widget"));
    }

    #[test]
    fn test_nested_generics() {
        let expr = parse("Page< List<Acme.Widget> >");
        assert_eq!(expr.name, "Page");
        assert_eq!(expr.args[0].name, "List");
        assert_eq!(expr.args[0].args[0], TypeExpr::named("Acme.Widget"));
        assert_eq!(expr.to_string(), "Page<List<Acme.Widget>>");
    }

    #[test]
    fn test_canonical_argument_separator() {
        assert_eq!(parse("Map<string,int>").to_string(), "Map<string, int>");
    }

    #[test]
    fn test_errors() {
        let err = "".parse::<TypeExpr>().unwrap_err();
        assert_eq!(err.message, "expected a type name");

        let err = "List<int".parse::<TypeExpr>().unwrap_err();
        assert_eq!(err.message, "expected ',' or '>'");
        assert_eq!(err.offset, 8);

        let err = "List<>".parse::<TypeExpr>().unwrap_err();
        assert_eq!(err.message, "expected a type name");

        let err = "int x".parse::<TypeExpr>().unwrap_err();
        assert_eq!(err.message, "unexpected trailing input");
        assert_eq!(err.offset, 4);
    }
}
