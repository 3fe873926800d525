//! Java source to [`ClassModel`] conversion using tree-sitter.

use super::Analyzer;
use crate::core::errors::{Error, Result};
use crate::core::{
    ClassKind, ClassModel, Expression, FieldMember, Member, MethodMember, Modifier, Parameter,
    Statement, TypeRef,
};
use std::path::Path;
use tree_sitter::{Node, Parser};

#[derive(Debug, Default, Clone, Copy)]
pub struct JavaAnalyzer;

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn create_parser() -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::Configuration(format!("Failed to set Java language: {}", e)))?;
        Ok(parser)
    }
}

impl Analyzer for JavaAnalyzer {
    fn parse_classes(&self, content: &str, path: &Path) -> Result<Vec<ClassModel>> {
        let mut parser = Self::create_parser()?;
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(path, "tree-sitter failed to parse Java"))?;

        let root = tree.root_node();
        if root.has_error() {
            log::warn!(
                "{} contains syntax errors; only well-formed declarations are modeled",
                path.display()
            );
        }

        let builder = ModelBuilder { source: content };
        Ok(builder.type_declarations(root))
    }
}

struct ModelBuilder<'s> {
    source: &'s str,
}

impl<'s> ModelBuilder<'s> {
    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    fn type_declarations(&self, root: Node) -> Vec<ClassModel> {
        root.named_children(&mut root.walk())
            .filter_map(|child| self.type_declaration(child))
            .collect()
    }

    fn type_declaration(&self, node: Node) -> Option<ClassModel> {
        let kind = match node.kind() {
            "class_declaration" => ClassKind::Class,
            "interface_declaration" => ClassKind::Interface,
            "enum_declaration" => ClassKind::Enum,
            "record_declaration" => ClassKind::Record,
            _ => return None,
        };
        let name = node.child_by_field_name("name")?;
        let mut class = ClassModel::new(self.text(name), kind);
        class.line = line_of(node);

        // Record components are implicit private final fields
        if let Some(components) = node.child_by_field_name("parameters") {
            for parameter in self.parameters(components) {
                let modifiers = vec![Modifier::Private, Modifier::Final];
                let mut field = FieldMember::new(parameter.name, parameter.ty, modifiers);
                field.line = line_of(components);
                class.members.push(Member::Field(field));
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.collect_members(body, &mut class.members);
        }
        Some(class)
    }

    fn collect_members(&self, body: Node, members: &mut Vec<Member>) {
        for child in body.named_children(&mut body.walk()) {
            match child.kind() {
                "field_declaration" => members.extend(self.fields(child, &[])),
                "constant_declaration" => members.extend(self.fields(
                    child,
                    &[Modifier::Public, Modifier::Static, Modifier::Final],
                )),
                "method_declaration" => members.push(Member::Method(self.method(child))),
                "constructor_declaration" | "compact_constructor_declaration" => {
                    members.push(Member::Constructor(self.constructor(child)))
                }
                "enum_body_declarations" => self.collect_members(child, members),
                "line_comment" | "block_comment" => {}
                kind => match self.type_declaration(child) {
                    Some(nested) => members.push(Member::Type(nested)),
                    None => members.push(Member::Other {
                        kind: kind.to_string(),
                    }),
                },
            }
        }
    }

    fn modifiers(&self, node: Node) -> Vec<Modifier> {
        let Some(modifiers) = node
            .children(&mut node.walk())
            .find(|child| child.kind() == "modifiers")
        else {
            return Vec::new();
        };
        modifiers
            .children(&mut modifiers.walk())
            .filter_map(|keyword| Modifier::from_keyword(keyword.kind()))
            .collect()
    }

    fn fields(&self, node: Node, implicit: &[Modifier]) -> Vec<Member> {
        let mut modifiers = self.modifiers(node);
        for modifier in implicit {
            if !modifiers.contains(modifier) {
                modifiers.push(*modifier);
            }
        }
        let ty = node.child_by_field_name("type");

        node.children_by_field_name("declarator", &mut node.walk())
            .filter_map(|declarator| {
                let name = declarator.child_by_field_name("name")?;
                let ty = match ty {
                    Some(ty) => {
                        self.declared_type(ty, declarator.child_by_field_name("dimensions"))
                    }
                    None => missing_type(),
                };
                let mut field = FieldMember::new(self.text(name), ty, modifiers.clone());
                field.line = line_of(declarator);
                Some(Member::Field(field))
            })
            .collect()
    }

    fn method(&self, node: Node) -> MethodMember {
        let return_type = match node.child_by_field_name("type") {
            Some(ty) => self.declared_type(ty, node.child_by_field_name("dimensions")),
            None => missing_type(),
        };
        self.callable(node, return_type)
    }

    fn constructor(&self, node: Node) -> MethodMember {
        self.callable(node, TypeRef::Void)
    }

    fn callable(&self, node: Node, return_type: TypeRef) -> MethodMember {
        let name = node
            .child_by_field_name("name")
            .map(|name| self.text(name))
            .unwrap_or_default();
        let mut method = MethodMember::new(name, return_type);
        method.line = line_of(node);
        method.modifiers = self.modifiers(node);
        if let Some(parameters) = node.child_by_field_name("parameters") {
            method.parameters = self.parameters(parameters);
        }
        method.body = node
            .child_by_field_name("body")
            .map(|body| self.statements(body));
        method
    }

    fn parameters(&self, node: Node) -> Vec<Parameter> {
        node.named_children(&mut node.walk())
            .filter_map(|parameter| match parameter.kind() {
                "formal_parameter" => {
                    let name = parameter.child_by_field_name("name")?;
                    let ty = parameter.child_by_field_name("type")?;
                    Some(Parameter::new(
                        self.text(name),
                        self.declared_type(ty, parameter.child_by_field_name("dimensions")),
                    ))
                }
                "spread_parameter" => self.spread_parameter(parameter),
                // `Foo this` receivers do not count towards arity
                _ => None,
            })
            .collect()
    }

    fn spread_parameter(&self, node: Node) -> Option<Parameter> {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        let declarator = children
            .iter()
            .find(|child| child.kind() == "variable_declarator")?;
        let ty = children
            .iter()
            .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"))?;
        let name = declarator.child_by_field_name("name")?;
        Some(Parameter::new(
            self.text(name),
            TypeRef::Reference(format!("{}...", self.text(*ty))),
        ))
    }

    fn declared_type(&self, ty: Node, dimensions: Option<Node>) -> TypeRef {
        if let Some(dimensions) = dimensions {
            return TypeRef::Reference(format!("{}{}", self.text(ty), self.text(dimensions)));
        }
        match ty.kind() {
            "void_type" | "boolean_type" | "integral_type" | "floating_point_type" => {
                TypeRef::from_primitive(self.text(ty))
            }
            _ => TypeRef::Reference(self.text(ty).to_string()),
        }
    }

    fn statements(&self, block: Node) -> Vec<Statement> {
        block
            .children(&mut block.walk())
            .filter(|child| !is_comment(*child) && !child.is_missing())
            .filter_map(|child| match child.kind() {
                // A stray `;` is an anonymous token but still a statement
                ";" => Some(Statement::Other {
                    kind: String::from("empty_statement"),
                }),
                _ if child.is_named() => Some(self.statement(child)),
                _ => None,
            })
            .collect()
    }

    fn statement(&self, node: Node) -> Statement {
        match node.kind() {
            "return_statement" => Statement::Return {
                value: first_named_child(node).map(|value| self.expression(value)),
            },
            "expression_statement" => match first_named_child(node) {
                Some(expr) if self.is_plain_assignment(expr) => {
                    let target = expr.child_by_field_name("left");
                    let value = expr.child_by_field_name("right");
                    match (target, value) {
                        (Some(target), Some(value)) => Statement::Assignment {
                            target: self.expression(target),
                            value: self.expression(value),
                        },
                        _ => Statement::Other {
                            kind: expr.kind().to_string(),
                        },
                    }
                }
                Some(expr) => Statement::Expression {
                    expr: self.expression(expr),
                },
                None => Statement::Other {
                    kind: node.kind().to_string(),
                },
            },
            kind => Statement::Other {
                kind: kind.to_string(),
            },
        }
    }

    fn is_plain_assignment(&self, expr: Node) -> bool {
        expr.kind() == "assignment_expression"
            && expr
                .child_by_field_name("operator")
                .is_some_and(|op| self.text(op) == "=")
    }

    fn expression(&self, node: Node) -> Expression {
        match node.kind() {
            "identifier" => Expression::Name(self.text(node).to_string()),
            "field_access" => {
                let object = node.child_by_field_name("object");
                let field = node.child_by_field_name("field");
                match (object, field) {
                    (Some(object), Some(field))
                        if object.kind() == "this" && field.kind() == "identifier" =>
                    {
                        Expression::SelfField(self.text(field).to_string())
                    }
                    _ => Expression::Other(node.kind().to_string()),
                }
            }
            "parenthesized_expression" => match first_named_child(node) {
                Some(inner) => self.expression(inner),
                None => Expression::Other(node.kind().to_string()),
            },
            "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal"
            | "decimal_floating_point_literal"
            | "hex_floating_point_literal"
            | "character_literal"
            | "string_literal"
            | "text_block"
            | "null_literal"
            | "true"
            | "false" => Expression::Literal(self.text(node).to_string()),
            kind => Expression::Other(kind.to_string()),
        }
    }
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

fn is_comment(node: Node) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

fn first_named_child(node: Node) -> Option<Node> {
    node.named_children(&mut node.walk())
        .find(|child| !is_comment(*child))
}

fn missing_type() -> TypeRef {
    TypeRef::Reference(String::from("<missing>"))
}
