//! Typed references between model nodes.

use std::fmt;

use crate::ids::Identifier;

/// Kind of model node a [`Key`] points at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    ConceptDescription,
    Submodel,
    SubmodelElement,
    GlobalReference,
}

/// One step in a reference chain.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Key {
    pub kind: KeyKind,
    pub value: String,
}

impl Key {
    pub fn new(kind: KeyKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A chain of keys pointing at a model node. Most references produced by the
/// import engine are single-key references to concept descriptions.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Reference {
    pub keys: Vec<Key>,
}

impl Reference {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Reference to a concept description by its identifier.
    pub fn to_concept(identifier: &Identifier) -> Self {
        Self {
            keys: vec![Key::new(KeyKind::ConceptDescription, identifier.id.clone())],
        }
    }

    /// Reference to a submodel by its identifier.
    pub fn to_submodel(identifier: &Identifier) -> Self {
        Self {
            keys: vec![Key::new(KeyKind::Submodel, identifier.id.clone())],
        }
    }

    /// Value of the first key, if any. Convenient for single-key references.
    pub fn first_value(&self) -> Option<&str> {
        self.keys.first().map(|key| key.value.as_str())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                f.write_str(" / ")?;
            }
            f.write_str(&key.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdKind;

    #[test]
    fn concept_reference_carries_identifier() {
        let id = Identifier::new(IdKind::Irdi, "0173-1#02-AAO677#002").unwrap();
        let reference = Reference::to_concept(&id);
        assert_eq!(reference.keys.len(), 1);
        assert_eq!(reference.keys[0].kind, KeyKind::ConceptDescription);
        assert_eq!(reference.first_value(), Some("0173-1#02-AAO677#002"));
    }
}
