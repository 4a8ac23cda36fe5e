//! File-based dictionary catalog provider for the import engine.
//!
//! The catalog format is a neutral JSON rendition of a property dictionary:
//! classes listing their properties, properties carrying unit and value-type
//! attributes, and value lists enumerating allowed values. Entries implement
//! the engine's [`aas_import::SourceElement`] contract.

pub mod catalog;
pub mod element;
pub mod error;
pub mod provider;

pub use catalog::{Catalog, CatalogEntry, CatalogValue, EntryKind};
pub use element::CatalogElement;
pub use error::CatalogError;
pub use provider::CatalogSelectionProvider;
