use crate::core::{ClassModel, FieldMember, Modifier};
use std::collections::HashMap;

/// Name-to-field lookup for one class.
///
/// Build it once per class and pass it to
/// [`classify_indexed`](super::classify_indexed) when classifying many
/// members of the same class. When a name is declared twice the first
/// declaration wins.
#[derive(Debug, Clone)]
pub struct FieldIndex<'a> {
    fields: HashMap<&'a str, &'a FieldMember>,
}

impl<'a> FieldIndex<'a> {
    pub fn new(class: &'a ClassModel) -> Self {
        let mut fields = HashMap::new();
        for field in class.fields() {
            fields.entry(field.name.as_str()).or_insert(field);
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&'a FieldMember> {
        self.fields.get(name).copied()
    }

    /// The named field, if it is a private instance field
    pub fn private_field(&self, name: &str) -> Option<&'a FieldMember> {
        self.get(name)
            .filter(|field| field.is_private() && !field.has_modifier(Modifier::Static))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassKind, Member, TypeRef};

    fn field(name: &str, modifiers: Vec<Modifier>) -> Member {
        Member::Field(FieldMember::new(
            name,
            TypeRef::Primitive("int".into()),
            modifiers,
        ))
    }

    #[test]
    fn test_private_field_lookup() {
        let class = ClassModel::new("T", ClassKind::Class)
            .with_member(field("a", vec![Modifier::Private]))
            .with_member(field("b", vec![]))
            .with_member(field("c", vec![Modifier::Private, Modifier::Static]));
        let index = FieldIndex::new(&class);

        assert_eq!(index.len(), 3);
        assert!(index.private_field("a").is_some());
        assert!(index.get("b").is_some());
        assert!(index.private_field("b").is_none());
        assert!(index.private_field("c").is_none());
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn test_first_declaration_wins() {
        let class = ClassModel::new("T", ClassKind::Class)
            .with_member(field("a", vec![]))
            .with_member(field("a", vec![Modifier::Private]));
        let index = FieldIndex::new(&class);

        assert_eq!(index.len(), 1);
        assert!(index.private_field("a").is_none());
    }
}
