pub mod concept;
pub mod element;
pub mod environment;
pub mod error;
pub mod ids;
pub mod reference;

pub use concept::ConceptDescription;
pub use element::{Collection, DataTypeDef, Property, SubmodelElement};
pub use environment::{
    AdministrationShell, ElementTarget, Environment, ShellHandle, Submodel, SubmodelHandle,
};
pub use error::{ModelError, Result};
pub use ids::{ConceptKey, IdKind, IdShort, Identifier};
pub use reference::{Key, KeyKind, Reference};
