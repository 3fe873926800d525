//! Structural model of Java type declarations.
//!
//! These types are produced by the analyzers (see [`crate::analyzers::java`])
//! and consumed read-only by the [`crate::classifier`]. Statements and
//! expressions are closed enums: anything the classifier does not need to
//! interpret collapses into an `Other` variant carrying the syntax kind.

pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a type declaration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Record => "record",
        };
        f.write_str(name)
    }
}

/// A declared type and its members, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    pub kind: ClassKind,
    pub line: usize,
    pub members: Vec<Member>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            line: 0,
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldMember> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Methods and constructors, in declaration order
    pub fn callables(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| matches!(m, Member::Method(_) | Member::Constructor(_)))
    }

    pub fn nested_types(&self) -> impl Iterator<Item = &ClassModel> {
        self.members.iter().filter_map(|m| match m {
            Member::Type(class) => Some(class),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Field(FieldMember),
    Method(MethodMember),
    /// Constructors share the method shape but are never accessors
    Constructor(MethodMember),
    /// Nested type declaration
    Type(ClassModel),
    /// Initializer blocks and anything else the builder does not model
    Other { kind: String },
}

impl Member {
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Field(field) => Some(&field.name),
            Member::Method(method) | Member::Constructor(method) => Some(&method.name),
            Member::Type(class) => Some(&class.name),
            Member::Other { .. } => None,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Member::Field(field) => field.line,
            Member::Method(method) | Member::Constructor(method) => method.line,
            Member::Type(class) => class.line,
            Member::Other { .. } => 0,
        }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, Member::Constructor(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Default,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let modifier = match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "abstract" => Modifier::Abstract,
            "default" => Modifier::Default,
            "synchronized" => Modifier::Synchronized,
            "native" => Modifier::Native,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "strictfp" => Modifier::Strictfp,
            _ => return None,
        };
        Some(modifier)
    }
}

/// Declared type of a field, parameter or method return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum TypeRef {
    Void,
    /// Primitive `boolean` (the boxed `Boolean` is a `Reference`)
    Boolean,
    /// Any other primitive: `int`, `long`, `double`, ...
    Primitive(String),
    /// Class, interface, array or generic type, as written in source
    Reference(String),
}

impl TypeRef {
    pub fn from_primitive(keyword: &str) -> Self {
        match keyword {
            "void" => TypeRef::Void,
            "boolean" => TypeRef::Boolean,
            other => TypeRef::Primitive(other.to_string()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Boolean => f.write_str("boolean"),
            TypeRef::Primitive(name) | TypeRef::Reference(name) => f.write_str(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldMember {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Vec<Modifier>,
    pub line: usize,
}

impl FieldMember {
    pub fn new(name: impl Into<String>, ty: TypeRef, modifiers: Vec<Modifier>) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers,
            line: 0,
        }
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_private(&self) -> bool {
        self.has_modifier(Modifier::Private)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodMember {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    pub modifiers: Vec<Modifier>,
    /// `None` for abstract and interface declarations
    pub body: Option<Vec<Statement>>,
    pub line: usize,
}

impl MethodMember {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            modifiers: Vec::new(),
            body: None,
            line: 0,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn has_parameter_named(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Statement {
    Return { value: Option<Expression> },
    /// Plain `target = value`; compound operators are `Expression`
    Assignment { target: Expression, value: Expression },
    /// Any other expression statement (`a++`, `a += 1`, calls, ...)
    Expression { expr: Expression },
    Other { kind: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expr", content = "value", rename_all = "snake_case")]
pub enum Expression {
    /// Bare identifier
    Name(String),
    /// `this.<ident>`
    SelfField(String),
    Literal(String),
    Other(String),
}

impl Expression {
    /// The field this expression names, if it is shaped like a field reference
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Expression::Name(name) | Expression::SelfField(name) => Some(name),
            Expression::Literal(_) | Expression::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_accepts_bare_and_qualified_references() {
        assert_eq!(Expression::Name("a".into()).field_name(), Some("a"));
        assert_eq!(Expression::SelfField("a".into()).field_name(), Some("a"));
        assert_eq!(Expression::Literal("1".into()).field_name(), None);
        assert_eq!(Expression::Other("unary_expression".into()).field_name(), None);
    }

    #[test]
    fn test_type_ref_from_primitive() {
        assert_eq!(TypeRef::from_primitive("void"), TypeRef::Void);
        assert_eq!(TypeRef::from_primitive("boolean"), TypeRef::Boolean);
        assert_eq!(
            TypeRef::from_primitive("int"),
            TypeRef::Primitive("int".to_string())
        );
    }

    #[test]
    fn test_callables_skip_fields_and_nested_types() {
        let class = ClassModel::new("T", ClassKind::Class)
            .with_member(Member::Field(FieldMember::new(
                "a",
                TypeRef::Primitive("int".into()),
                vec![Modifier::Private],
            )))
            .with_member(Member::Type(ClassModel::new("Inner", ClassKind::Class)))
            .with_member(Member::Constructor(MethodMember::new("T", TypeRef::Void)))
            .with_member(Member::Method(MethodMember::new("run", TypeRef::Void)));

        let names: Vec<_> = class.callables().filter_map(Member::name).collect();
        assert_eq!(names, vec!["T", "run"]);
        assert_eq!(class.fields().count(), 1);
        assert_eq!(class.nested_types().count(), 1);
    }

    #[test]
    fn test_modifier_keywords() {
        assert_eq!(Modifier::from_keyword("private"), Some(Modifier::Private));
        assert_eq!(Modifier::from_keyword("@Override"), None);
    }
}
