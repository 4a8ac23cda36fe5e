//! Validated identifier newtypes for the target document model.

use std::fmt;

use crate::error::ModelError;

/// Scheme of an [`Identifier`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    /// Internationalized resource identifier.
    Iri,
    /// International registration data identifier (ISO 29002-5), used by
    /// property dictionaries such as eCl@ss and IEC CDD.
    Irdi,
    /// Any other caller-defined scheme.
    Custom,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Iri => "IRI",
            Self::Irdi => "IRDI",
            Self::Custom => "Custom",
        };
        f.write_str(text)
    }
}

/// Identification of an identifiable node (shell, submodel, concept description).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Identifier {
    pub kind: IdKind,
    pub id: String,
}

impl Identifier {
    pub fn new(kind: IdKind, id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidIdentifier(id));
        }
        Ok(Self {
            kind,
            id: trimmed.to_string(),
        })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.id)
    }
}

/// Short name of a referable node, unique among its siblings.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IdShort(String);

impl IdShort {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(ModelError::InvalidIdShort(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Builds an idShort from arbitrary source text, replacing characters
    /// outside `[A-Za-z0-9_]` with underscores and stripping underscores at
    /// the boundaries. Falls back to `"Element"` when nothing usable
    /// remains.
    pub fn sanitized(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.trim().chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                out.push(ch);
            } else {
                out.push('_');
            }
        }
        let trimmed = out.trim_matches('_');
        if trimmed.is_empty() {
            Self("Element".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable, source-scoped key of one external concept (e.g. an IRDI or an
/// eCl@ss class code). Used for deduplication within one import operation.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ConceptKey(String);

impl ConceptKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidConceptKey(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the key is non-empty after trimming. Keys deserialized from
    /// external files bypass [`Self::new`], so loaders re-check this.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for ConceptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
