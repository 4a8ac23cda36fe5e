//! Provider-agnostic import engine for administration-shell documents.
//!
//! External classification catalogs (property dictionaries such as eCl@ss or
//! IEC CDD) are exposed to the engine through the [`SourceElement`] contract;
//! the engine drives selected elements through conversion into a target
//! [`aas_model::Environment`], deduplicating concept descriptions and
//! recording relationships it cannot resolve.

pub mod collaborators;
pub mod context;
pub mod engine;
pub mod error;
pub mod source;

pub use collaborators::{
    ContainerBuilder, IdGenerator, ReportSink, Selection, SelectionProvider,
    SequentialIdGenerator, TemplateShellBuilder, TracingReport,
};
pub use context::{ImportContext, RelationKind, UnknownReference};
pub use engine::{ImportOutcome, import_submodel_elements, import_submodels};
pub use error::ImportError;
pub use source::{ImportMode, SourceElement, SourceKind};
