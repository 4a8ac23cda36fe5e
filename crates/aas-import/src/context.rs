//! Per-operation import state: created concepts and unknown references.

use std::collections::BTreeMap;
use std::fmt;

use aas_model::{ConceptKey, Reference};

/// Why one concept referenced another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// A property or class referencing its defining (super)class.
    DefiningClass,
    /// A class referencing one of its properties.
    PropertyOfClass,
    /// A property referencing its value list.
    ValueList,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::DefiningClass => "defining class",
            Self::PropertyOfClass => "property",
            Self::ValueList => "value list",
        };
        f.write_str(text)
    }
}

/// A relationship whose target concept was not among the created elements
/// when it was encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReference {
    /// Key of the concept that could not be resolved.
    pub target: ConceptKey,
    /// Key of the element that held the reference.
    pub referenced_by: ConceptKey,
    pub relation: RelationKind,
}

impl fmt::Display for UnknownReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.target, self.relation, self.referenced_by
        )
    }
}

/// State accumulated across one import operation.
///
/// A context is owned by exactly one orchestrator invocation and must not be
/// reused for a second operation: the deduplication map would suppress node
/// creation for concepts that only exist in the previous operation's
/// document.
#[derive(Debug, Default)]
pub struct ImportContext {
    created: BTreeMap<ConceptKey, Reference>,
    unknown_references: Vec<UnknownReference>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reference recorded for a previously created concept.
    pub fn lookup(&self, key: &ConceptKey) -> Option<&Reference> {
        self.created.get(key)
    }

    /// Records the target-tree node created for a concept.
    ///
    /// # Panics
    ///
    /// Panics if the key is already registered. Callers check
    /// [`Self::lookup`] before creating a node, so a duplicate registration
    /// is a programming error, not a runtime condition.
    pub fn register_created(&mut self, key: ConceptKey, reference: Reference) {
        let previous = self.created.insert(key.clone(), reference);
        assert!(
            previous.is_none(),
            "concept {key} registered twice in one import operation"
        );
    }

    /// Appends an unresolved relationship descriptor. Descriptors are never
    /// deduplicated; each occurrence is kept to preserve provenance.
    pub fn record_unknown_reference(&mut self, reference: UnknownReference) {
        self.unknown_references.push(reference);
    }

    /// Resolves a relationship eagerly against the created elements, or
    /// records it as unknown and returns `None`.
    pub fn resolve_or_record(
        &mut self,
        target: &ConceptKey,
        referenced_by: &ConceptKey,
        relation: RelationKind,
    ) -> Option<Reference> {
        if let Some(reference) = self.created.get(target) {
            return Some(reference.clone());
        }
        self.record_unknown_reference(UnknownReference {
            target: target.clone(),
            referenced_by: referenced_by.clone(),
            relation,
        });
        None
    }

    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn unknown_references(&self) -> &[UnknownReference] {
        &self.unknown_references
    }

    /// Consumes the context, yielding the accumulated unknown references in
    /// encounter order.
    pub fn into_unknown_references(self) -> Vec<UnknownReference> {
        self.unknown_references
    }
}
