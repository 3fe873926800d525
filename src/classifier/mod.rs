//! Getter/setter classification.
//!
//! A member is an accessor when it is a method that does nothing but read or
//! write exactly one private field of its class.
//!
//! # Detection Strategy
//!
//! 1. Constructors and methods without a body are rejected outright
//! 2. The name must be `is`/`get`/`set` followed by a capitalized property
//! 3. Getters: no parameters, `is` getters return `boolean`, and the body is
//!    a single `return <property>;` (optionally `this.`-qualified)
//! 4. Setters: one parameter, `void` return, and the body is a single plain
//!    `<property> = ...;` assignment
//! 5. The referenced field is declared in the class and is private
//!
//! Only shape and naming are checked. Anything the rules do not recognize is
//! classified as "not an accessor"; classification never fails.

mod field_index;
mod naming;

pub use field_index::FieldIndex;
pub use naming::{property_name, AccessorPrefix};

use crate::core::{ClassModel, Expression, Member, MethodMember, Statement, TypeRef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccessorKind {
    Getter { property: String },
    Setter { property: String },
}

impl AccessorKind {
    pub fn property(&self) -> &str {
        match self {
            AccessorKind::Getter { property } | AccessorKind::Setter { property } => property,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessorKind::Getter { .. } => "getter",
            AccessorKind::Setter { .. } => "setter",
        }
    }
}

/// Whether `member` of `class` is a trivial getter or setter
pub fn is_accessor(class: &ClassModel, member: &Member) -> bool {
    classify(class, member).is_some()
}

pub fn is_accessor_indexed(fields: &FieldIndex<'_>, member: &Member) -> bool {
    classify_indexed(fields, member).is_some()
}

/// Classify a single member, scanning the class for its fields.
pub fn classify(class: &ClassModel, member: &Member) -> Option<AccessorKind> {
    classify_indexed(&FieldIndex::new(class), member)
}

/// Classify a member against a prebuilt field index of its class.
pub fn classify_indexed(fields: &FieldIndex<'_>, member: &Member) -> Option<AccessorKind> {
    let method = match member {
        Member::Method(method) => method,
        _ => return None,
    };
    let body = method.body.as_deref()?;
    let (prefix, property) = property_name(&method.name)?;

    match prefix {
        AccessorPrefix::Is | AccessorPrefix::Get => {
            is_getter(fields, method, prefix, body, &property)
                .then_some(AccessorKind::Getter { property })
        }
        AccessorPrefix::Set => {
            is_setter(fields, method, body, &property).then_some(AccessorKind::Setter { property })
        }
    }
}

fn is_getter(
    fields: &FieldIndex<'_>,
    method: &MethodMember,
    prefix: AccessorPrefix,
    body: &[Statement],
    property: &str,
) -> bool {
    if prefix == AccessorPrefix::Is && method.return_type != TypeRef::Boolean {
        return false;
    }
    if !method.parameters.is_empty() {
        return false;
    }

    match body {
        [Statement::Return { value: Some(value) }] => {
            references_private_field(fields, value, property)
        }
        _ => false,
    }
}

/// `void setA(int a) { a = a; }` is rejected: in Java the parameter shadows
/// the field, so the body never writes the field.
fn is_setter(
    fields: &FieldIndex<'_>,
    method: &MethodMember,
    body: &[Statement],
    property: &str,
) -> bool {
    if method.return_type != TypeRef::Void || method.parameters.len() != 1 {
        return false;
    }

    match body {
        // A bare name that matches the parameter assigns the parameter itself
        [Statement::Assignment {
            target: Expression::Name(name),
            ..
        }] if method.has_parameter_named(name) => false,
        [Statement::Assignment { target, .. }] => {
            references_private_field(fields, target, property)
        }
        _ => false,
    }
}

fn references_private_field(fields: &FieldIndex<'_>, expr: &Expression, property: &str) -> bool {
    expr.field_name() == Some(property) && fields.private_field(property).is_some()
}
