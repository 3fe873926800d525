//! Accessor naming conventions: `getX`, `isX`, `setX`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorPrefix {
    Is,
    Get,
    Set,
}

impl AccessorPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorPrefix::Is => "is",
            AccessorPrefix::Get => "get",
            AccessorPrefix::Set => "set",
        }
    }
}

const PREFIXES: [AccessorPrefix; 3] = [
    AccessorPrefix::Is,
    AccessorPrefix::Get,
    AccessorPrefix::Set,
];

/// Split a method name into its accessor prefix and the property it names.
///
/// The suffix after the prefix must be non-empty and start with an uppercase
/// letter; the property is that suffix with only its first letter lowered
/// (`getFoo` -> `foo`, `getURL` -> `uRL`). Names like `issue`, `get` or
/// `settle` do not follow the convention and yield `None`.
pub fn property_name(method_name: &str) -> Option<(AccessorPrefix, String)> {
    PREFIXES.iter().find_map(|prefix| {
        let suffix = method_name.strip_prefix(prefix.as_str())?;
        decapitalize(suffix).map(|property| (*prefix, property))
    })
}

fn decapitalize(suffix: &str) -> Option<String> {
    let mut chars = suffix.chars();
    let first = chars.next()?;
    if !first.is_uppercase() {
        return None;
    }
    Some(first.to_lowercase().chain(chars).collect())
}
