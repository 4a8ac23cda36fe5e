//! The capability contract implemented once per external data format.

use std::fmt;

use aas_model::{ConceptKey, ElementTarget, Environment, ShellHandle};

use crate::context::ImportContext;

/// Selects which conversion capability an import operation exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportMode {
    /// Selected elements become submodels under an administration shell.
    Submodels,
    /// Selected elements become submodel elements under an existing parent.
    SubmodelElements,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Submodels => "submodels",
            Self::SubmodelElements => "submodel elements",
        };
        f.write_str(text)
    }
}

/// Type classification of a source element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A classification class; imports as a submodel or a collection.
    Class,
    /// A single property definition.
    Property,
    /// An enumeration of allowed values.
    ValueList,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Class => "class",
            Self::Property => "property",
            Self::ValueList => "value list",
        };
        f.write_str(text)
    }
}

/// One importable node of an external catalog.
///
/// Implementations are read-only views over parsed source data; conversion
/// mutates only the target environment and the [`ImportContext`].
///
/// Both conversion capabilities have a default implementation returning
/// `false` ("nothing importable"), so a format only implements the entry
/// points its data can actually produce. The orchestrator invokes the
/// capability matching its [`ImportMode`]; the other one is never called.
pub trait SourceElement {
    /// Source-scoped stable key, unique within the element's catalog.
    fn key(&self) -> &ConceptKey;

    /// Human-readable name for logs and listings.
    fn display_name(&self) -> &str;

    fn kind(&self) -> SourceKind;

    /// Creates a submodel populated from this element and appends it under
    /// the given shell. Returns whether a submodel was created.
    fn import_submodel_into(
        &self,
        _env: &mut Environment,
        _shell: ShellHandle,
        _ctx: &mut ImportContext,
    ) -> bool {
        false
    }

    /// Creates one or more submodel elements under the target container.
    /// Returns whether at least one element was created.
    fn import_submodel_elements_into(
        &self,
        _env: &mut Environment,
        _target: &ElementTarget,
        _ctx: &mut ImportContext,
    ) -> bool {
        false
    }
}
