//! The target document: administration shells, submodels and concept
//! descriptions, plus the handle types used to address nodes inside it.
//!
//! The import engine only ever appends to an environment. Existing children
//! are never replaced or removed.

use crate::concept::ConceptDescription;
use crate::element::SubmodelElement;
use crate::ids::{IdShort, Identifier};
use crate::reference::Reference;

/// A named top-level grouping node within the document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submodel {
    pub identifier: Identifier,
    pub id_short: IdShort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default)]
    pub elements: Vec<SubmodelElement>,
}

impl Submodel {
    pub fn new(identifier: Identifier, id_short: IdShort) -> Self {
        Self {
            identifier,
            id_short,
            semantic_id: None,
            elements: Vec::new(),
        }
    }

    pub fn with_semantic_id(mut self, reference: Reference) -> Self {
        self.semantic_id = Some(reference);
        self
    }
}

/// The root document node holding references to its submodels.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdministrationShell {
    pub identifier: Identifier,
    pub id_short: IdShort,
    #[serde(default)]
    pub submodels: Vec<Reference>,
}

impl AdministrationShell {
    pub fn new(identifier: Identifier, id_short: IdShort) -> Self {
        Self {
            identifier,
            id_short,
            submodels: Vec::new(),
        }
    }
}

/// Index of an administration shell within an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShellHandle(pub(crate) usize);

/// Index of a submodel within an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmodelHandle(pub(crate) usize);

/// Names an element container inside an environment: a submodel, or a
/// collection nested below it addressed by child indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTarget {
    submodel: SubmodelHandle,
    path: Vec<usize>,
}

impl ElementTarget {
    /// Targets the element list of a submodel.
    pub fn submodel(handle: SubmodelHandle) -> Self {
        Self {
            submodel: handle,
            path: Vec::new(),
        }
    }

    /// Descends into the child at `index`, which must be a collection when
    /// the target is resolved.
    pub fn child(mut self, index: usize) -> Self {
        self.path.push(index);
        self
    }

    /// Resolves the target to its element list, or `None` when the path does
    /// not lead to a submodel or collection.
    pub fn resolve<'env>(
        &self,
        env: &'env mut Environment,
    ) -> Option<&'env mut Vec<SubmodelElement>> {
        let submodel = env.submodels.get_mut(self.submodel.0)?;
        let mut current = &mut submodel.elements;
        for index in &self.path {
            match current.get_mut(*index) {
                Some(SubmodelElement::Collection(collection)) => {
                    current = &mut collection.elements;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    /// Read-only counterpart of [`Self::resolve`].
    pub fn peek<'env>(&self, env: &'env Environment) -> Option<&'env Vec<SubmodelElement>> {
        let submodel = env.submodels.get(self.submodel.0)?;
        let mut current = &submodel.elements;
        for index in &self.path {
            match current.get(*index) {
                Some(SubmodelElement::Collection(collection)) => current = &collection.elements,
                _ => return None,
            }
        }
        Some(current)
    }
}

/// The destination document tree for an import operation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub shells: Vec<AdministrationShell>,
    #[serde(default)]
    pub submodels: Vec<Submodel>,
    #[serde(default)]
    pub concept_descriptions: Vec<ConceptDescription>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shell and returns its handle.
    pub fn add_shell(&mut self, shell: AdministrationShell) -> ShellHandle {
        self.shells.push(shell);
        ShellHandle(self.shells.len() - 1)
    }

    /// Appends a free-standing submodel and returns its handle.
    pub fn add_submodel(&mut self, submodel: Submodel) -> SubmodelHandle {
        self.submodels.push(submodel);
        SubmodelHandle(self.submodels.len() - 1)
    }

    /// Appends a submodel and records a reference to it in the given shell.
    ///
    /// # Panics
    ///
    /// Panics if `shell` does not belong to this environment. Handles are
    /// only produced by the environment itself, so a stale handle is a
    /// caller bug.
    pub fn attach_submodel(&mut self, shell: ShellHandle, submodel: Submodel) -> SubmodelHandle {
        let reference = Reference::to_submodel(&submodel.identifier);
        let handle = self.add_submodel(submodel);
        self.shells[shell.0].submodels.push(reference);
        handle
    }

    /// Appends a concept description.
    pub fn add_concept_description(&mut self, concept: ConceptDescription) {
        self.concept_descriptions.push(concept);
    }

    /// # Panics
    ///
    /// Panics if the handle does not belong to this environment.
    pub fn shell(&self, handle: ShellHandle) -> &AdministrationShell {
        &self.shells[handle.0]
    }

    /// # Panics
    ///
    /// Panics if the handle does not belong to this environment.
    pub fn submodel(&self, handle: SubmodelHandle) -> &Submodel {
        &self.submodels[handle.0]
    }

    /// Looks up a concept description by identifier.
    pub fn find_concept(&self, identifier: &Identifier) -> Option<&ConceptDescription> {
        self.concept_descriptions
            .iter()
            .find(|concept| &concept.identifier == identifier)
    }
}
